use super::*;
use crate::menu::model::TopMenu;

const QUIT_KEY: char = 'q';

fn demo_model() -> MenuModel {
    MenuModel::new(vec![
        TopMenu::new("File", ["New", "Open", "Save", "---", "Quit"]),
        TopMenu::new("Edit", ["Cut", "Copy"]),
        TopMenu::new("Help", Vec::<String>::new()),
    ])
    .unwrap()
}

fn quit_first_model() -> MenuModel {
    MenuModel::new(vec![TopMenu::new("App", ["Quit", "About"])]).unwrap()
}

#[test]
fn navigate_wraps_in_both_directions() {
    let model = demo_model();
    let mut bar = MenuBar::new();

    bar.navigate(&model, Direction::Left);
    assert_eq!(bar.active(), 2);
    bar.navigate(&model, Direction::Right);
    assert_eq!(bar.active(), 0);
    bar.navigate(&model, Direction::Right);
    bar.navigate(&model, Direction::Right);
    bar.navigate(&model, Direction::Right);
    assert_eq!(bar.active(), 0);
}

#[test]
fn left_then_right_returns_to_start_from_every_index() {
    let model = demo_model();
    for start in 0..model.len() {
        for (first, second) in [
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ] {
            let mut bar = MenuBar::new();
            for _ in 0..start {
                bar.navigate(&model, Direction::Right);
            }
            assert_eq!(bar.active(), start);
            bar.navigate(&model, first);
            bar.navigate(&model, second);
            assert_eq!(bar.active(), start);
        }
    }
}

#[test]
fn navigate_on_empty_model_is_a_no_op() {
    let model = MenuModel::new(Vec::new()).unwrap();
    let mut bar = MenuBar::new();
    assert_eq!(bar.navigate(&model, Direction::Left), Effect::None);
    assert_eq!(bar.navigate(&model, Direction::Right), Effect::None);
    assert_eq!(bar.active(), 0);
    assert_eq!(bar.open_submenu(&model), Effect::None);
    assert!(!bar.is_open());
}

#[test]
fn open_submenu_copies_children_and_resets_selection() {
    let model = demo_model();
    let mut bar = MenuBar::new();

    assert_eq!(bar.open_submenu(&model), Effect::None);
    assert_eq!(bar.mode(), MenuMode::SubmenuOpen);
    let submenu = bar.submenu().unwrap();
    assert_eq!(submenu.items(), &["New", "Open", "Save", "---", "Quit"]);
    assert_eq!(submenu.selected(), 0);
}

#[test]
fn open_submenu_without_children_stays_browsing() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.navigate(&model, Direction::Left); // Help

    bar.open_submenu(&model);
    assert_eq!(bar.mode(), MenuMode::Browsing);
    assert!(bar.submenu().is_none());
}

#[test]
fn navigate_is_ignored_while_open() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.open_submenu(&model);
    bar.navigate(&model, Direction::Right);
    assert_eq!(bar.active(), 0);
    assert!(bar.is_open());
}

#[test]
fn close_submenu_requests_repaint_only_when_open() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    assert_eq!(bar.close_submenu(), Effect::None);

    bar.open_submenu(&model);
    assert_eq!(bar.close_submenu(), Effect::Repaint);
    assert_eq!(bar.mode(), MenuMode::Browsing);
}

#[test]
fn activating_quit_item_signals_quit_and_closes() {
    let model = quit_first_model();
    let mut bar = MenuBar::new();
    bar.open_submenu(&model);

    assert_eq!(bar.activate_selected(), Effect::Quit);
    assert!(!bar.is_open());
}

#[test]
fn activating_other_items_only_closes() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.open_submenu(&model);

    assert_eq!(bar.activate_selected(), Effect::Repaint);
    assert!(!bar.is_open());
}

#[test]
fn up_and_down_in_submenu_leave_selection_alone() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.open_submenu(&model);

    for key in [LogicalKey::Down, LogicalKey::Down, LogicalKey::Up] {
        assert_eq!(bar.handle_key(&model, key, QUIT_KEY), Effect::None);
    }
    assert_eq!(bar.submenu().unwrap().selected(), 0);
}

#[test]
fn main_context_dispatch() {
    let model = demo_model();
    let mut bar = MenuBar::new();

    assert_eq!(bar.handle_key(&model, LogicalKey::Right, QUIT_KEY), Effect::None);
    assert_eq!(bar.active(), 1);
    assert_eq!(bar.handle_key(&model, LogicalKey::Left, QUIT_KEY), Effect::None);
    assert_eq!(bar.active(), 0);
    assert_eq!(bar.handle_key(&model, LogicalKey::Esc, QUIT_KEY), Effect::None);
    assert_eq!(bar.handle_key(&model, LogicalKey::Char('x'), QUIT_KEY), Effect::None);
    assert_eq!(bar.handle_key(&model, LogicalKey::Up, QUIT_KEY), Effect::None);
    assert!(!bar.is_open());

    assert_eq!(bar.handle_key(&model, LogicalKey::Down, QUIT_KEY), Effect::None);
    assert!(bar.is_open());
}

#[test]
fn arrow_keys_wrap_the_bar_through_dispatch() {
    let model = demo_model();
    let mut bar = MenuBar::new();

    assert_eq!(bar.handle_key(&model, LogicalKey::Left, QUIT_KEY), Effect::None);
    assert_eq!(bar.active(), 2);
    assert_eq!(bar.handle_key(&model, LogicalKey::Right, QUIT_KEY), Effect::None);
    assert_eq!(bar.active(), 0);
    assert!(!bar.is_open());
}

#[test]
fn quit_key_only_works_while_browsing() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    assert_eq!(bar.handle_key(&model, LogicalKey::Char('q'), QUIT_KEY), Effect::Quit);

    bar.handle_key(&model, LogicalKey::Enter, QUIT_KEY);
    assert_eq!(bar.handle_key(&model, LogicalKey::Char('q'), QUIT_KEY), Effect::None);
    assert!(bar.is_open());
}

#[test]
fn submenu_context_dispatch() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.handle_key(&model, LogicalKey::Enter, QUIT_KEY);

    assert_eq!(bar.handle_key(&model, LogicalKey::Left, QUIT_KEY), Effect::None);
    assert!(bar.is_open());
    assert_eq!(bar.handle_key(&model, LogicalKey::Esc, QUIT_KEY), Effect::Repaint);
    assert!(!bar.is_open());

    bar.handle_key(&model, LogicalKey::Enter, QUIT_KEY);
    assert_eq!(bar.handle_key(&model, LogicalKey::Enter, QUIT_KEY), Effect::Repaint);
    assert!(!bar.is_open());
}

#[test]
fn force_close_drops_items() {
    let model = demo_model();
    let mut bar = MenuBar::new();
    bar.open_submenu(&model);
    bar.force_close();
    assert_eq!(bar.mode(), MenuMode::Browsing);
    assert!(bar.submenu().is_none());
}
