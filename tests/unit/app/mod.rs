use super::*;
use crate::core::input::ScriptedInput;
use crate::menu::MenuMode;
use crate::services::MenuConfig;
use crate::ui::surface::HeadlessSurface;

fn config() -> AppConfig {
    AppConfig {
        title: "demo".to_string(),
        menus: vec![
            MenuConfig::new("File", &["New", "Open", "Save", "---", "Quit"]),
            MenuConfig::new("Edit", &["Undo", "Redo"]),
            MenuConfig::new("Help", &[]),
        ],
        ..AppConfig::default()
    }
}

fn app(rows: u16, cols: u16, keys: &[LogicalKey]) -> App<HeadlessSurface, ScriptedInput> {
    App::new(
        HeadlessSurface::new(rows, cols),
        ScriptedInput::new(keys.iter().copied()),
        &config(),
    )
    .unwrap()
}

#[test]
fn small_terminals_are_rejected_at_startup() {
    let err = App::new(
        HeadlessSurface::new(2, 80),
        ScriptedInput::default(),
        &config(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, AppError::TerminalTooSmall { rows: 2, cols: 80 }));

    let err = App::new(
        HeadlessSurface::new(24, 39),
        ScriptedInput::default(),
        &config(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, AppError::TerminalTooSmall { rows: 24, cols: 39 }));
    assert!(err.to_string().contains("24x39"));
}

#[test]
fn invalid_config_is_rejected_at_startup() {
    let mut config = config();
    config.colors.highlight = "white/nope".to_string();
    let err = App::new(
        HeadlessSurface::new(24, 80),
        ScriptedInput::default(),
        &config,
    )
    .err()
    .unwrap();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn first_frame_draws_border_menu_bar_and_title() {
    let mut app = app(10, 40, &[]);
    app.draw_frame();

    let surface = app.surface();
    assert_eq!(
        surface.row_text(0),
        "┌─[File]── Edit ── Help ──────demo─────┐"
    );
    assert_eq!(surface.row_text(5), format!("│{}│", " ".repeat(38)));
    assert_eq!(surface.row_text(9), format!("└{}┘", "─".repeat(38)));
    assert_eq!(app.anchor_column(), 2);
    assert_eq!(surface.presents(), 1);
}

#[test]
fn anchor_follows_the_highlighted_entry_and_survives_opening() {
    let mut app = app(24, 80, &[]);
    app.handle_key(LogicalKey::Right);
    app.draw_frame();
    assert_eq!(app.anchor_column(), 10);

    app.handle_key(LogicalKey::Enter);
    app.draw_frame();
    assert_eq!(app.menu().mode(), MenuMode::SubmenuOpen);
    // No entry is highlighted while open; the last anchor stays in use.
    assert_eq!(app.anchor_column(), 10);

    let row1 = app.surface().row_text(1);
    let col = row1.chars().position(|c| c == '┌').unwrap();
    assert_eq!(col, 10);
    assert!(app.surface().row_text(2).contains("│ Undo │"));
}

#[test]
fn closing_a_submenu_clears_before_the_next_frame() {
    let mut app = app(24, 80, &[]);
    app.handle_key(LogicalKey::Enter);
    app.draw_frame();
    assert!(app.surface().row_text(2).contains(" New "));

    assert_eq!(app.handle_key(LogicalKey::Esc), Effect::Repaint);
    app.draw_frame();
    assert_eq!(app.surface().clears(), 1);
    assert!(!app.surface().row_text(2).contains("New"));
    assert_eq!(app.surface().row_text(2), format!("│{}│", " ".repeat(78)));
}

#[test]
fn popup_that_cannot_fit_is_force_closed() {
    let mut app = app(4, 40, &[]);
    app.handle_key(LogicalKey::Enter);
    assert!(app.menu().is_open());

    app.draw_frame();
    assert_eq!(app.menu().mode(), MenuMode::Browsing);
    assert_eq!(app.surface().presents(), 1);

    app.draw_frame();
    assert_eq!(app.anchor_column(), 2);
}

#[test]
fn failed_refresh_is_retried_with_flush() {
    let surface = HeadlessSurface::new(24, 80).failing_present(true);
    let mut app = App::new(surface, ScriptedInput::default(), &config()).unwrap();
    app.draw_frame();
    assert_eq!(app.surface().presents(), 1);
    assert_eq!(app.surface().flushes(), 1);

    let surface = HeadlessSurface::new(24, 80)
        .failing_present(true)
        .failing_flush(true);
    let mut app = App::new(surface, ScriptedInput::default(), &config()).unwrap();
    app.draw_frame();
    app.draw_frame();
    assert_eq!(app.surface().flushes(), 2);
}

#[test]
fn successful_refresh_does_not_flush() {
    let mut app = app(24, 80, &[]);
    app.draw_frame();
    assert_eq!(app.surface().flushes(), 0);
}

#[test]
fn run_returns_on_quit_key() {
    let mut app = app(24, 80, &[LogicalKey::Right, LogicalKey::Char('q')]);
    app.run().unwrap();
    assert_eq!(app.menu().active(), 1);
    assert_eq!(app.surface().presents(), 2);
}

#[test]
fn run_returns_on_quit_item() {
    let keys = [LogicalKey::Enter, LogicalKey::Enter];
    let mut app = App::new(
        HeadlessSurface::new(24, 80),
        ScriptedInput::new(keys),
        &AppConfig {
            menus: vec![MenuConfig::new("Session", &["Quit", "Stay"])],
            ..AppConfig::default()
        },
    )
    .unwrap();
    app.run().unwrap();
    assert!(!app.menu().is_open());
}

#[test]
fn quit_key_is_ignored_while_a_submenu_is_open() {
    let mut app = app(24, 80, &[LogicalKey::Enter, LogicalKey::Char('q')]);
    let err = app.run().unwrap_err();
    assert!(matches!(err, AppError::Input(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    assert!(app.menu().is_open());
}
