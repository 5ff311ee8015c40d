use super::*;

fn items() -> Vec<PickerItem> {
    let file = |name: &str, rel: &str| {
        PickerItem::File(CandidateFile {
            name: name.to_string(),
            relative_path: rel.to_string(),
            project: "app1".to_string(),
        })
    };
    vec![
        PickerItem::ShowWorkspace,
        PickerItem::Separator,
        file("main.ts", "apps/app1/src/main.ts"),
        file("app.module.ts", "apps/app1/src/app/app.module.ts"),
    ]
}

fn options() -> QuickPickOptions {
    QuickPickOptions {
        placeholder: "Files in app1 (2 files)".to_string(),
        match_on_description: true,
        match_on_detail: true,
    }
}

#[test]
fn test_strip_icons() {
    assert_eq!(strip_icons("$(globe) Show Entire Workspace"), "Show Entire Workspace");
    assert_eq!(strip_icons("$(search) Project"), "Project");
    assert_eq!(strip_icons("plain"), "plain");
}

#[test]
fn test_unfiltered_view_keeps_separator() {
    let items = items();
    assert_eq!(visible_items(&items, "", &options()), vec![0, 1, 2, 3]);
}

#[test]
fn test_filter_keeps_sentinel_and_drops_separator() {
    let items = items();
    assert_eq!(visible_items(&items, "module", &options()), vec![0, 3]);
}

#[test]
fn test_numbers_skip_separators() {
    let items = items();
    let visible = visible_items(&items, "", &options());
    assert_eq!(pick_numbered(&items, &visible, 1), Some(0));
    assert_eq!(pick_numbered(&items, &visible, 2), Some(2));
    assert_eq!(pick_numbered(&items, &visible, 3), Some(3));
    assert_eq!(pick_numbered(&items, &visible, 0), None);
    assert_eq!(pick_numbered(&items, &visible, 4), None);
}

#[test]
fn test_status_item_tracks_last_write() {
    let item = TerminalStatusItem::new(Command::ToggleScope);
    item.show();
    item.set_text("$(search) Project");
    item.set_tooltip("MonoScope: app1\nClick to switch to workspace mode");
    item.set_text("$(globe) Workspace");

    let line = item.line.lock().unwrap().clone();
    assert_eq!(line.text, "$(globe) Workspace");
    assert!(line.visible);

    item.dispose();
    let line = item.line.lock().unwrap().clone();
    assert!(!line.visible);
    assert!(line.text.is_empty());
}

#[test]
fn test_status_hint_names_toggle_command() {
    let item = TerminalStatusItem::new(Command::ToggleScope);
    assert_eq!(
        item.hint(),
        "MonoScope: Toggle Quick Open Scope: monoScope.toggleScope"
    );
}
