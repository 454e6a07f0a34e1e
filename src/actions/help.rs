use crate::app::{AppMode, AppState};

/// Opens the help overlay. Any pending drag or connect gesture is dropped
/// since the board is hidden behind it.
pub fn show_help(app: &mut AppState) {
    if app.editing_card().is_some() {
        return;
    }
    app.drag = None;
    app.last_click = None;
    app.mode = AppMode::Help;
}

pub fn close_help(app: &mut AppState) {
    if app.mode == AppMode::Help {
        app.mode = AppMode::Normal;
    }
}

pub fn quit(app: &mut AppState) {
    tracing::debug!(cards = app.board.len(), "quit requested");
    app.running = false;
}
