use corkboard::actions::{execute_action, Action};
use corkboard::ui::controls;
use corkboard::{AppConfig, AppMode, AppState, BoardCommand, CardData, Connection, Position};
use std::time::{Duration, Instant};

mod common;
use common::*;

fn run(app: &mut AppState, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        execute_action(action, app).unwrap();
    }
}

fn type_text(app: &mut AppState, text: &str) {
    run(app, text.chars().map(Action::TypeChar));
}

#[test]
fn test_app_state_initialization() {
    let app = AppState::new(AppConfig::default());

    assert!(app.running);
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.board.len(), 1);
    assert_eq!(app.selected, None);
    assert!(app.needs_fit);
}

#[test]
fn test_keyboard_add_edit_confirm() {
    let mut app = create_test_app();
    run(&mut app, [Action::AddCard]);
    let id = app.selected.clone().expect("new card is selected");
    assert_eq!(app.message.as_deref(), Some("Card added"));

    run(&mut app, [Action::EditSelected, Action::DeleteToStart]);
    type_text(&mut app, "Todo");
    run(&mut app, [Action::Newline, Action::DeleteToStart]);
    type_text(&mut app, "write tests");
    run(&mut app, [Action::Newline]);
    type_text(&mut app, "ship");
    run(&mut app, [Action::ConfirmEdit]);

    let card = app.board.card(&id).unwrap();
    assert_eq!(card.data, CardData::new("Todo", "write tests\nship"));
    assert!(app.editing_card().is_none());
    assert_eq!(
        app.board.card(&welcome_id()).unwrap().data.title,
        "Welcome"
    );
}

#[test]
fn test_keyboard_edit_cancel() {
    let mut app = create_test_app();
    run(
        &mut app,
        [Action::SelectNext, Action::EditSelected, Action::Backspace],
    );
    type_text(&mut app, "!!!");
    run(&mut app, [Action::CancelEdit]);

    assert_eq!(
        app.board.card(&welcome_id()).unwrap().data.title,
        "Welcome"
    );
    assert_eq!(app.view(&welcome_id()).unwrap().title(), "Welcome");
}

#[test]
fn test_delete_selected_card() {
    let mut app = create_test_app();
    run(&mut app, [Action::AddCard, Action::DeleteSelected]);
    assert_eq!(app.board.len(), 1);
    assert_eq!(app.selected, None);

    run(&mut app, [Action::DeleteSelected]);
    assert_eq!(app.board.len(), 1);
    assert_eq!(app.message.as_deref(), Some("No card selected"));
}

#[test]
fn test_nudge_moves_by_grid_steps() {
    let mut app = create_test_app();
    run(
        &mut app,
        [
            Action::SelectNext,
            Action::NudgeSelected { dx: 1, dy: 0 },
            Action::NudgeSelected { dx: 0, dy: -1 },
            Action::NudgeSelected { dx: 0, dy: -1 },
        ],
    );
    let card = app.board.card(&welcome_id()).unwrap();
    assert_eq!(card.position, Position::new(275.0, 200.0));
}

#[test]
fn test_keyboard_connect_flow() {
    let mut app = create_test_app();
    let other = app.dispatch(BoardCommand::AddCard).unwrap();

    run(&mut app, [Action::SelectNext, Action::StartConnect]);
    assert!(matches!(app.mode, AppMode::Connecting { .. }));

    run(
        &mut app,
        [
            Action::CycleConnectTarget { forward: true },
            Action::ConfirmConnect,
        ],
    );
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(
        app.board.connections(),
        &[Connection::new(welcome_id(), other.clone())]
    );

    // Deleting either end removes the line
    app.select(Some(other));
    run(&mut app, [Action::DeleteSelected]);
    assert!(app.board.connections().is_empty());
}

#[test]
fn test_keyboard_disconnect_flow() {
    let mut app = create_test_app();
    let other = app.dispatch(BoardCommand::AddCard).unwrap();
    run(
        &mut app,
        [
            Action::SelectNext,
            Action::StartConnect,
            Action::ConfirmConnect,
        ],
    );
    assert_eq!(app.board.connections().len(), 1);

    // Same source and target again, this time removing the link
    run(&mut app, [Action::StartConnect, Action::DisconnectTarget]);
    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.board.connections().is_empty());
    assert_eq!(
        app.message.as_deref(),
        Some(format!("Disconnected 1 from {other}").as_str())
    );
    assert_eq!(app.board.len(), 2);
}

#[test]
fn test_mouse_double_click_edit_and_drag() {
    let mut app = create_test_app();
    let t0 = Instant::now();

    // Welcome card covers columns 25..50 and terminal rows 13..21
    run(
        &mut app,
        [
            Action::PointerDown {
                column: 30,
                row: 14,
                at: t0,
            },
            Action::PointerUp {
                column: 30,
                row: 14,
            },
            Action::PointerDown {
                column: 30,
                row: 14,
                at: t0 + Duration::from_millis(100),
            },
        ],
    );
    assert_eq!(app.editing_card(), Some(&welcome_id()));
    run(&mut app, [Action::CancelEdit]);

    run(
        &mut app,
        [
            Action::PointerDown {
                column: 40,
                row: 15,
                at: t0 + Duration::from_secs(5),
            },
            Action::PointerDrag {
                column: 30,
                row: 15,
            },
            Action::PointerUp {
                column: 30,
                row: 15,
            },
        ],
    );
    let card = app.board.card(&welcome_id()).unwrap();
    assert_eq!(card.position, Position::new(150.0, 250.0));
}

#[test]
fn test_toolbar_button_adds_card() {
    let mut app = create_test_app();
    let button = controls::add_button_rect(app.canvas_area);
    run(
        &mut app,
        [Action::PointerDown {
            column: button.x,
            row: button.y,
            at: Instant::now(),
        }],
    );
    assert_eq!(app.board.len(), 2);
}

#[test]
fn test_zoom_keys_and_fit() {
    let mut app = create_test_app();
    run(&mut app, [Action::ZoomIn, Action::ZoomIn]);
    assert!((app.viewport.zoom() - 1.44).abs() < 1e-9);

    run(&mut app, [Action::FitView]);
    let rect = app.card_rect(app.board.card(&welcome_id()).unwrap());
    assert!(rect.x >= 0 && rect.right() <= app.canvas_area.width as i32);
    assert!(rect.y >= 0 && rect.bottom() <= app.canvas_area.height as i32);
}

#[test]
fn test_zoom_respects_configured_bounds() {
    let mut app = create_test_app_with(AppConfig {
        min_zoom: 0.5,
        max_zoom: 2.0,
        ..AppConfig::default()
    });
    run(&mut app, std::iter::repeat(Action::ZoomIn).take(20));
    assert_eq!(app.viewport.zoom(), 2.0);
    run(&mut app, std::iter::repeat(Action::ZoomOut).take(20));
    assert_eq!(app.viewport.zoom(), 0.5);
}

#[test]
fn test_help_and_quit() {
    let mut app = create_test_app();
    run(&mut app, [Action::ShowHelp]);
    assert_eq!(app.mode, AppMode::Help);
    run(&mut app, [Action::CloseHelp]);
    assert_eq!(app.mode, AppMode::Normal);

    run(&mut app, [Action::Quit]);
    assert!(!app.running);
}

#[test]
fn test_message_cleared_by_next_action() {
    let mut app = create_test_app();
    run(&mut app, [Action::AddCard]);
    assert!(app.message.is_some());
    run(&mut app, [Action::Pan { cols: 1, rows: 0 }]);
    assert!(app.message.is_none());
}
