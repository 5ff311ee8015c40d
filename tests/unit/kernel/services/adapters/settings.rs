use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_merge_json_later_layer_wins() {
    let mut settings = LayeredSettings::new();
    settings
        .merge_json(r#"{ "monoScope.defaultScope": "project", "editor.tabSize": 2 }"#)
        .unwrap();
    settings
        .merge_json(r#"{ "monoScope.defaultScope": "workspace" }"#)
        .unwrap();

    assert_eq!(
        settings.get("monoScope.defaultScope").as_deref(),
        Some("workspace")
    );
    assert_eq!(settings.get("editor.tabSize").as_deref(), Some("2"));
}

#[test]
fn test_nested_values_are_skipped() {
    let mut settings = LayeredSettings::new();
    settings.merge_json(r#"{ "a": { "b": 1 }, "c": [1] }"#).unwrap();
    assert_eq!(settings.get("a"), None);
    assert_eq!(settings.get("c"), None);
}

#[test]
fn test_malformed_file_keeps_previous_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ oops").unwrap();

    let mut settings = LayeredSettings::new();
    settings.set("monoScope.defaultScope", "workspace");
    settings.merge_file(&path);
    settings.merge_file(&dir.path().join("missing.json"));

    assert_eq!(
        settings.get("monoScope.defaultScope").as_deref(),
        Some("workspace")
    );
}

#[test]
fn test_workspace_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = workspace_settings_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{ "monoScope.defaultScope": "workspace" }"#).unwrap();

    let settings = LayeredSettings::load(Some(dir.path()));
    assert_eq!(settings.get_or("monoScope.defaultScope", "project"), "workspace");
}
