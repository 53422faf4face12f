use super::*;

fn file_menu() -> TopMenu {
    TopMenu::new("File", ["New", "Open", "Save", "---", "Quit"])
}

#[test]
fn model_preserves_insertion_order() {
    let model = MenuModel::new(vec![
        file_menu(),
        TopMenu::new("Edit", ["Cut"]),
        TopMenu::new("Help", Vec::<String>::new()),
    ])
    .unwrap();

    assert_eq!(model.len(), 3);
    assert_eq!(model.labels().collect::<Vec<_>>(), vec!["File", "Edit", "Help"]);
    assert_eq!(model.label(2), Some("Help"));
    assert_eq!(model.label(3), None);
}

#[test]
fn children_lookup_by_label_and_index() {
    let model = MenuModel::new(vec![file_menu(), TopMenu::new("Help", Vec::<String>::new())]).unwrap();

    assert_eq!(model.children("File").unwrap().len(), 5);
    assert_eq!(model.children("Help"), Some(&[][..]));
    assert_eq!(model.children("Nope"), None);
    assert_eq!(model.children_at(0)[4], "Quit");
    assert!(model.children_at(9).is_empty());
}

#[test]
fn empty_items_mean_no_submenu() {
    assert!(file_menu().has_submenu());
    assert!(!TopMenu::new("Help", Vec::<String>::new()).has_submenu());
}

#[test]
fn duplicate_labels_are_rejected() {
    let err = MenuModel::new(vec![file_menu(), file_menu()]).unwrap_err();
    assert_eq!(err, MenuModelError::DuplicateLabel("File".to_string()));
}

#[test]
fn blank_labels_are_rejected() {
    let err = MenuModel::new(vec![file_menu(), TopMenu::new("  ", ["x"])]).unwrap_err();
    assert_eq!(err, MenuModelError::EmptyLabel { index: 1 });
}

#[test]
fn empty_model_is_valid() {
    let model = MenuModel::new(Vec::new()).unwrap();
    assert!(model.is_empty());
    assert!(model.children_at(0).is_empty());
}
