use super::*;

fn file_item(name: &str, relative_path: &str, project: &str) -> PickerItem {
    PickerItem::File(CandidateFile {
        name: name.to_string(),
        relative_path: relative_path.to_string(),
        project: project.to_string(),
    })
}

fn options() -> QuickPickOptions {
    QuickPickOptions {
        placeholder: String::new(),
        match_on_description: true,
        match_on_detail: true,
    }
}

#[test]
fn test_sentinel_item_fields() {
    let item = PickerItem::ShowWorkspace;
    assert_eq!(item.label(), SHOW_WORKSPACE_LABEL);
    assert_eq!(item.description(), Some(SHOW_WORKSPACE_DESCRIPTION));
    assert_eq!(item.detail(), None);
    assert!(item.always_show());
}

#[test]
fn test_file_item_fields() {
    let item = file_item("main.ts", "apps/app1/src/main.ts", "app1");
    assert_eq!(item.label(), "main.ts");
    assert_eq!(item.description(), Some("apps/app1/src/main.ts"));
    assert_eq!(item.detail(), Some("app1"));
    assert!(!item.always_show());
}

#[test]
fn test_matches_on_description_and_detail() {
    let item = file_item("main.ts", "apps/app1/src/main.ts", "app1");
    assert!(item.matches("MAIN", &options()));
    assert!(item.matches("src/", &options()));
    assert!(item.matches("app1", &options()));
    assert!(!item.matches("libs", &options()));

    let label_only = QuickPickOptions::default();
    assert!(!item.matches("src/", &label_only));
}

#[test]
fn test_sentinel_always_matches_and_separator_never() {
    assert!(PickerItem::ShowWorkspace.matches("zzz", &options()));
    assert!(!PickerItem::Separator.matches("", &options()));
}
