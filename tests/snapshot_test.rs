use corkboard::actions::{execute_action, Action};
use corkboard::{AppState, Position};
use insta::assert_snapshot;

mod common;
use common::*;

fn frame_text(app: &mut AppState, width: u16, height: u16) -> String {
    render_to_lines(app, width, height).join("\n")
}

#[test]
fn test_render_welcome_board() {
    let mut app = create_test_app_with(plain_config());
    app.viewport.pan = Position::new(230.0, 230.0);

    assert_snapshot!(frame_text(&mut app, 40, 12), @r"
     BULLETIN BOARD
                               [+ Add Note]
      ╭───────────────────────╮
      │ Welcome               │
      │ Double click to edit. │
      │ Drag to move.         │
      │ Click + to add new    │
      │ cards.                │
      │                       │
      ╰───────────•───────────╯
     [+] [-] [fit]
    Bulletin Board | 1 cards | 0 connections
    ");
}

#[test]
fn test_first_frame_fits_cards() {
    let mut app = AppState::new(plain_config());
    assert!(app.needs_fit);

    let lines = render_to_lines(&mut app, 80, 24);
    assert!(!app.needs_fit);
    assert!(lines.iter().any(|line| line.contains("Welcome")));
    assert!(lines.iter().any(|line| line.contains("Double click to edit.")));
}

#[test]
fn test_render_help_overlay() {
    let mut app = create_test_app();
    execute_action(Action::ShowHelp, &mut app).unwrap();

    let lines = render_to_lines(&mut app, 80, 40);
    assert!(lines.iter().any(|line| line.contains(" Help ")));
    assert!(lines.iter().any(|line| line.contains("Bulletin Board Help")));
    assert!(lines.iter().any(|line| line.contains("Cards:")));
    assert_eq!(lines[39], "Press ESC or q to close help");
}

#[test]
fn test_render_editing_card() {
    let mut app = create_test_app_with(plain_config());
    app.viewport.pan = Position::new(230.0, 230.0);
    execute_action(Action::SelectNext, &mut app).unwrap();
    execute_action(Action::EditSelected, &mut app).unwrap();

    let lines = render_to_lines(&mut app, 40, 12);
    assert_eq!(lines[3], "  │ Welcome▌              │");
    assert!(lines[11].starts_with("Edit: 1 [title]"));
}

#[test]
fn test_render_minimap_and_grid() {
    let mut app = create_test_app();
    app.viewport.pan = Position::new(230.0, 230.0);

    let lines = render_to_lines(&mut app, 80, 24);
    let marks: usize = lines.iter().map(|line| line.matches('■').count()).sum();
    assert_eq!(marks, 1);
    assert!(lines.iter().any(|line| line.contains('·')));
}

#[test]
fn test_render_connection_between_cards() {
    let mut app = create_test_app_with(plain_config());
    app.viewport.pan = Position::new(230.0, 230.0);
    let below = app.dispatch(corkboard::BoardCommand::AddCard).unwrap();
    app.dispatch(corkboard::BoardCommand::MoveCard {
        id: below.clone(),
        position: Position::new(250.0, 450.0),
    });
    app.dispatch(corkboard::BoardCommand::Connect {
        source: welcome_id(),
        target: below,
    });

    let lines = render_to_lines(&mut app, 40, 24);
    // Handle on the welcome card's bottom edge, arrow just above the new card
    assert_eq!(lines[9].chars().nth(14), Some('•'));
    assert_eq!(lines[10].chars().nth(14), Some('│'));
    assert_eq!(lines[11].chars().nth(14), Some('▼'));
    assert!(lines[12].starts_with("  ╭"));
    assert!(lines[23].contains("1 connections"));
}
