use super::*;
use crate::kernel::services::adapters::LocalWorkspace;
use std::fs;
use tempfile::{tempdir, TempDir};

fn workspace() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let root = dir.path().join("ws");
    fs::create_dir_all(&root).unwrap();
    (dir, root)
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn resolver_for(folders: Vec<PathBuf>) -> ProjectResolver {
    let local = Arc::new(LocalWorkspace::new(folders));
    ProjectResolver::new(local.clone(), local)
}

#[test]
fn test_apps_heuristic_resolves_direct_child() {
    let (_dir, root) = workspace();
    let file = root.join("apps/app1/src/main.ts");
    touch(&file);

    let resolver = resolver_for(vec![root.clone()]);
    let project = resolver.find_project_root(&file).unwrap();

    assert_eq!(project, root.join("apps/app1"));
    assert_eq!(resolver.relative_project_path(&project).unwrap(), "apps/app1");
    assert_eq!(resolver.project_name(&project), "app1");
}

#[test]
fn test_libs_heuristic_resolves_direct_child() {
    let (_dir, root) = workspace();
    let file = root.join("libs/baz/index.ts");
    touch(&file);

    let resolver = resolver_for(vec![root.clone()]);
    assert_eq!(resolver.find_project_root(&file), Some(root.join("libs/baz")));
}

#[test]
fn test_marker_found_on_the_way_up() {
    let (_dir, root) = workspace();
    let file = root.join("libs/shared/a/b/c.ts");
    touch(&file);
    touch(&root.join("libs/shared/project.json"));

    let resolver = resolver_for(vec![root.clone()]);
    assert_eq!(resolver.find_project_root(&file), Some(root.join("libs/shared")));
}

#[test]
fn test_marker_takes_priority_over_container_heuristic() {
    let (_dir, root) = workspace();
    let file = root.join("apps/app1/nested/feature/src/x.ts");
    touch(&file);
    touch(&root.join("apps/app1/nested/feature/project.json"));

    let resolver = resolver_for(vec![root.clone()]);
    assert_eq!(
        resolver.find_project_root(&file),
        Some(root.join("apps/app1/nested/feature"))
    );
}

#[test]
fn test_closest_marker_wins() {
    let (_dir, root) = workspace();
    let file = root.join("tools/gen/inner/src/a.ts");
    touch(&file);
    touch(&root.join("tools/gen/project.json"));
    touch(&root.join("tools/gen/inner/project.json"));

    let resolver = resolver_for(vec![root.clone()]);
    assert_eq!(
        resolver.find_project_root(&file),
        Some(root.join("tools/gen/inner"))
    );
}

#[test]
fn test_root_marker_project_has_no_relative_path() {
    let (_dir, root) = workspace();
    let file = root.join("scripts/build.ts");
    touch(&file);
    touch(&root.join("project.json"));

    let resolver = resolver_for(vec![root.clone()]);
    let project = resolver.find_project_root(&file).unwrap();
    assert_eq!(project, root);
    assert_eq!(resolver.relative_project_path(&project), None);
}

#[test]
fn test_no_project_inside_workspace() {
    let (_dir, root) = workspace();
    let file = root.join("tools/scripts/run.ts");
    touch(&file);

    let resolver = resolver_for(vec![root.clone()]);
    assert_eq!(resolver.find_project_root(&file), None);
}

#[test]
fn test_file_outside_workspace_is_unresolved() {
    let (dir, root) = workspace();
    let outside = dir.path().join("other/apps/app1/src/main.ts");
    touch(&outside);
    touch(&dir.path().join("other/apps/app1/project.json"));

    let resolver = resolver_for(vec![root]);
    assert_eq!(resolver.find_project_root(&outside), None);
}

#[test]
fn test_sibling_with_shared_prefix_is_outside() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("foo");
    fs::create_dir_all(&root).unwrap();
    let file = dir.path().join("foobar/apps/app1/main.ts");
    touch(&file);

    let resolver = resolver_for(vec![root]);
    assert_eq!(resolver.find_project_root(&file), None);
}

#[test]
fn test_walk_does_not_escape_workspace_root() {
    let dir = tempdir().unwrap();
    // Marker above the workspace must not be picked up.
    touch(&dir.path().join("project.json"));
    let root = dir.path().join("ws");
    let file = root.join("src/main.ts");
    touch(&file);

    let resolver = resolver_for(vec![root]);
    assert_eq!(resolver.find_project_root(&file), None);
}

#[test]
fn test_empty_path_is_unresolved() {
    let (_dir, root) = workspace();
    let resolver = resolver_for(vec![root]);
    assert_eq!(resolver.find_project_root(Path::new("")), None);
}

#[test]
fn test_relative_path_without_workspace_is_absent() {
    let resolver = resolver_for(Vec::new());
    assert_eq!(resolver.relative_project_path(Path::new("/ws/apps/app1")), None);
}

#[test]
fn test_to_slash_never_emits_backslash() {
    assert_eq!(to_slash(Path::new("apps/app1")), "apps/app1");
    assert_eq!(to_slash(Path::new("apps/we\\ird")), "apps/we/ird");
    assert_eq!(to_slash(Path::new("")), "");
    for input in ["a\\b\\c", "libs/x\\y/z", "\\\\server\\share"] {
        assert!(!to_slash(Path::new(input)).contains('\\'));
    }
}

#[test]
fn test_project_name_is_base_name() {
    assert_eq!(project_name(Path::new("/ws/libs/shared")), "shared");
    assert_eq!(project_name(Path::new("/ws/apps/app1/")), "app1");
}
