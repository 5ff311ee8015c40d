use super::*;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_memory_memento_update_and_get() {
    let memento = MemoryMemento::new();
    assert_eq!(memento.get("k"), None);

    memento.update("k", "v1").await.unwrap();
    memento.update("k", "v2").await.unwrap();
    assert_eq!(memento.get("k").as_deref(), Some("v2"));
}

#[tokio::test]
async fn test_json_memento_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/state.json");

    let memento = JsonMemento::open(path.clone());
    memento
        .update("monoScope.scopeMode", "workspace")
        .await
        .unwrap();
    assert!(path.exists());

    let reopened = JsonMemento::open(path);
    assert_eq!(
        reopened.get("monoScope.scopeMode").as_deref(),
        Some("workspace")
    );
}

#[test]
fn test_json_memento_ignores_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{not json").unwrap();

    let memento = JsonMemento::open(path);
    assert_eq!(memento.get("monoScope.scopeMode"), None);
}

#[tokio::test]
async fn test_json_memento_write_failure_is_storage_error() {
    let dir = tempdir().unwrap();
    // Parent "directory" is a regular file, so the write cannot succeed.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let memento = JsonMemento::open(blocker.join("state.json"));
    let result = memento.update("k", "v").await;
    assert!(matches!(result, Err(HostError::Storage { .. })));
    assert_eq!(memento.get("k"), None);
}

#[tokio::test]
async fn test_json_memento_failed_update_keeps_previous_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state/state.json");

    let memento = JsonMemento::open(path.clone());
    memento.update("monoScope.scopeMode", "project").await.unwrap();

    // Replace the state directory with a regular file.
    fs::remove_dir_all(dir.path().join("state")).unwrap();
    fs::write(dir.path().join("state"), "").unwrap();

    let result = memento.update("monoScope.scopeMode", "workspace").await;
    assert!(result.is_err());
    assert_eq!(
        memento.get("monoScope.scopeMode").as_deref(),
        Some("project")
    );
}
