mod card;
mod editing;
mod help;
mod pointer;
mod view;

use crate::app::AppState;
use anyhow::Result;
use std::time::Instant;

// Re-export all public functions from submodules
pub use card::*;
pub use editing::*;
pub use help::*;
pub use pointer::*;
pub use view::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application control
    Quit,

    // Cards
    AddCard,
    SelectNext,
    SelectPrevious,
    EditSelected,
    DeleteSelected,
    NudgeSelected { dx: i32, dy: i32 },

    // Connections
    StartConnect,
    CycleConnectTarget { forward: bool },
    ConfirmConnect,
    CancelConnect,
    DisconnectTarget,

    // Canvas
    Pan { cols: i32, rows: i32 },
    ZoomIn,
    ZoomOut,
    FitView,
    ToggleMinimap,

    // Editing
    TypeChar(char),
    Newline,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    MoveCursorWordLeft,
    MoveCursorWordRight,
    DeleteWordBackward,
    DeleteToEnd,
    DeleteToStart,
    PasteAtCursor,
    SwitchField,
    ConfirmEdit,
    CancelEdit,

    // Pointer
    PointerDown { column: u16, row: u16, at: Instant },
    PointerDrag { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },
    ScrollZoom { column: u16, row: u16, zoom_in: bool },

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    if !matches!(action, Action::PointerDrag { .. }) {
        app.clear_message();
    }

    match action {
        Action::Quit => help::quit(app),

        // Cards
        Action::AddCard => card::add_card(app),
        Action::SelectNext => card::select_next(app),
        Action::SelectPrevious => card::select_previous(app),
        Action::EditSelected => editing::start_editing(app),
        Action::DeleteSelected => card::delete_selected(app),
        Action::NudgeSelected { dx, dy } => card::nudge_selected(app, dx, dy),

        // Connections
        Action::StartConnect => card::start_connect(app),
        Action::CycleConnectTarget { forward } => card::cycle_connect_target(app, forward),
        Action::ConfirmConnect => card::confirm_connect(app),
        Action::CancelConnect => card::cancel_connect(app),
        Action::DisconnectTarget => card::disconnect_target(app),

        // Canvas
        Action::Pan { cols, rows } => view::pan(app, cols, rows),
        Action::ZoomIn => view::zoom_in(app),
        Action::ZoomOut => view::zoom_out(app),
        Action::FitView => view::fit_view(app),
        Action::ToggleMinimap => view::toggle_minimap(app),

        // Editing
        Action::TypeChar(c) => editing::type_char(app, c),
        Action::Newline => editing::newline(app),
        Action::Backspace => editing::backspace(app),
        Action::Delete => editing::delete_char(app),
        Action::MoveCursorLeft => editing::move_cursor_left(app),
        Action::MoveCursorRight => editing::move_cursor_right(app),
        Action::MoveCursorHome => editing::move_cursor_home(app),
        Action::MoveCursorEnd => editing::move_cursor_end(app),
        Action::MoveCursorWordLeft => editing::move_cursor_word_left(app),
        Action::MoveCursorWordRight => editing::move_cursor_word_right(app),
        Action::DeleteWordBackward => editing::delete_word_backward(app),
        Action::DeleteToEnd => editing::delete_to_end(app),
        Action::DeleteToStart => editing::delete_to_start(app),
        Action::PasteAtCursor => editing::paste_at_cursor(app),
        Action::SwitchField => editing::switch_field(app),
        Action::ConfirmEdit => editing::confirm_edit(app),
        Action::CancelEdit => editing::cancel_edit(app),

        // Pointer
        Action::PointerDown { column, row, at } => pointer::pointer_down(app, column, row, at),
        Action::PointerDrag { column, row } => pointer::pointer_drag(app, column, row),
        Action::PointerUp { column, row } => pointer::pointer_up(app, column, row),
        Action::ScrollZoom {
            column,
            row,
            zoom_in,
        } => pointer::scroll_zoom(app, column, row, zoom_in),

        // Help
        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }
    Ok(())
}
