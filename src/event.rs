use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const PAN_STEP: i32 = 4;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(POLL_INTERVAL)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(mouse, Instant::now()),
            _ => None,
        });
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    // Quit works from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Some(Action::Quit);
    }
    if app.mode == AppMode::Help {
        return handle_help_mode(key);
    }
    if app.editing_card().is_some() {
        return handle_editing_mode(key);
    }
    match &app.mode {
        AppMode::Connecting { .. } => handle_connecting_mode(key),
        _ => handle_normal_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        // Cards
        (Char('a'), KeyModifiers::NONE) | (Char('n'), KeyModifiers::NONE) => {
            Some(Action::AddCard)
        }
        (Tab, KeyModifiers::NONE) => Some(Action::SelectNext),
        (BackTab, _) => Some(Action::SelectPrevious),
        (Char('e'), KeyModifiers::NONE) | (Enter, KeyModifiers::NONE) => {
            Some(Action::EditSelected)
        }
        (Char('d'), KeyModifiers::NONE) | (Delete, _) => Some(Action::DeleteSelected),

        // Nudge the selected card
        (Char('h'), KeyModifiers::NONE) => Some(Action::NudgeSelected { dx: -1, dy: 0 }),
        (Char('j'), KeyModifiers::NONE) => Some(Action::NudgeSelected { dx: 0, dy: 1 }),
        (Char('k'), KeyModifiers::NONE) => Some(Action::NudgeSelected { dx: 0, dy: -1 }),
        (Char('l'), KeyModifiers::NONE) => Some(Action::NudgeSelected { dx: 1, dy: 0 }),

        // Connections
        (Char('c'), KeyModifiers::NONE) => Some(Action::StartConnect),

        // View control
        (Left, _) => Some(Action::Pan {
            cols: -PAN_STEP,
            rows: 0,
        }),
        (Right, _) => Some(Action::Pan {
            cols: PAN_STEP,
            rows: 0,
        }),
        (Up, _) => Some(Action::Pan {
            cols: 0,
            rows: -PAN_STEP / 2,
        }),
        (Down, _) => Some(Action::Pan {
            cols: 0,
            rows: PAN_STEP / 2,
        }),
        (Char('+'), _) | (Char('='), KeyModifiers::NONE) => Some(Action::ZoomIn),
        (Char('-'), KeyModifiers::NONE) => Some(Action::ZoomOut),
        (Char('0'), KeyModifiers::NONE) => Some(Action::FitView),
        (Char('m'), KeyModifiers::NONE) => Some(Action::ToggleMinimap),

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_editing_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Basic editing
        (Esc, _) => Some(Action::CancelEdit),
        (Char('s'), KeyModifiers::CONTROL) => Some(Action::ConfirmEdit),
        (Enter, _) => Some(Action::Newline),
        (Tab, _) | (BackTab, _) => Some(Action::SwitchField),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeChar(c)),

        // Deletion
        (Backspace, KeyModifiers::NONE) => Some(Action::Backspace),
        (Backspace, KeyModifiers::CONTROL) => Some(Action::DeleteWordBackward),
        (Backspace, KeyModifiers::ALT) => Some(Action::DeleteWordBackward),
        (Char('w'), KeyModifiers::CONTROL) => Some(Action::DeleteWordBackward),
        (Delete, KeyModifiers::NONE) => Some(Action::Delete),
        (Char('k'), KeyModifiers::CONTROL) => Some(Action::DeleteToEnd),
        (Char('u'), KeyModifiers::CONTROL) => Some(Action::DeleteToStart),

        // Movement
        (Left, KeyModifiers::NONE) => Some(Action::MoveCursorLeft),
        (Right, KeyModifiers::NONE) => Some(Action::MoveCursorRight),
        (Left, KeyModifiers::CONTROL) => Some(Action::MoveCursorWordLeft),
        (Right, KeyModifiers::CONTROL) => Some(Action::MoveCursorWordRight),
        (Left, KeyModifiers::ALT) => Some(Action::MoveCursorWordLeft),
        (Right, KeyModifiers::ALT) => Some(Action::MoveCursorWordRight),
        (Char('b'), KeyModifiers::ALT) => Some(Action::MoveCursorWordLeft),
        (Char('f'), KeyModifiers::ALT) => Some(Action::MoveCursorWordRight),
        (Home, _) => Some(Action::MoveCursorHome),
        (End, _) => Some(Action::MoveCursorEnd),
        (Char('a'), KeyModifiers::CONTROL) => Some(Action::MoveCursorHome),
        (Char('e'), KeyModifiers::CONTROL) => Some(Action::MoveCursorEnd),

        // Clipboard
        (Char('v'), KeyModifiers::CONTROL) => Some(Action::PasteAtCursor),

        _ => None,
    }
}

fn handle_connecting_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match key.code {
        Esc => Some(Action::CancelConnect),
        Enter => Some(Action::ConfirmConnect),
        Tab => Some(Action::CycleConnectTarget { forward: true }),
        Char('x') | Delete => Some(Action::DisconnectTarget),
        BackTab => Some(Action::CycleConnectTarget { forward: false }),
        Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, at: Instant) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown { column, row, at }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Action::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::PointerUp { column, row }),
        MouseEventKind::ScrollUp => Some(Action::ScrollZoom {
            column,
            row,
            zoom_in: true,
        }),
        MouseEventKind::ScrollDown => Some(Action::ScrollZoom {
            column,
            row,
            zoom_in: false,
        }),
        _ => None,
    }
}
