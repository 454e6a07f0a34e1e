use crate::app::AppState;
use crate::card_view::CardView;
use clipboard::{ClipboardContext, ClipboardProvider};

pub fn start_editing(app: &mut AppState) {
    if app.editing_card().is_some() {
        return;
    }
    let Some(id) = app.selected.clone() else {
        app.set_message("No card selected");
        return;
    };
    if let Some(view) = app.view_mut(&id) {
        view.begin_edit();
    }
}

fn with_editing(app: &mut AppState, edit: impl FnOnce(&mut CardView)) {
    if let Some(view) = app.editing_view_mut() {
        edit(view);
    }
}

pub fn type_char(app: &mut AppState, c: char) {
    with_editing(app, |view| view.insert_char(c));
}

pub fn newline(app: &mut AppState) {
    with_editing(app, CardView::insert_newline);
}

pub fn backspace(app: &mut AppState) {
    with_editing(app, CardView::backspace);
}

pub fn delete_char(app: &mut AppState) {
    with_editing(app, CardView::delete_forward);
}

pub fn move_cursor_left(app: &mut AppState) {
    with_editing(app, CardView::move_left);
}

pub fn move_cursor_right(app: &mut AppState) {
    with_editing(app, CardView::move_right);
}

pub fn move_cursor_home(app: &mut AppState) {
    with_editing(app, CardView::move_home);
}

pub fn move_cursor_end(app: &mut AppState) {
    with_editing(app, CardView::move_end);
}

pub fn move_cursor_word_left(app: &mut AppState) {
    with_editing(app, CardView::move_word_left);
}

pub fn move_cursor_word_right(app: &mut AppState) {
    with_editing(app, CardView::move_word_right);
}

pub fn delete_word_backward(app: &mut AppState) {
    with_editing(app, CardView::delete_word_backward);
}

pub fn delete_to_end(app: &mut AppState) {
    with_editing(app, CardView::delete_to_end);
}

pub fn delete_to_start(app: &mut AppState) {
    with_editing(app, CardView::delete_to_start);
}

pub fn switch_field(app: &mut AppState) {
    with_editing(app, CardView::switch_field);
}

pub fn paste_at_cursor(app: &mut AppState) {
    if app.editing_card().is_none() {
        return;
    }
    let pasted = ClipboardContext::new().and_then(|mut ctx| ctx.get_contents());
    match pasted {
        Ok(text) => with_editing(app, |view| view.insert_str(&text)),
        Err(e) => app.set_message(format!("Clipboard unavailable: {}", e)),
    }
}

pub fn confirm_edit(app: &mut AppState) {
    let Some(command) = app.editing_view_mut().and_then(CardView::confirm) else {
        return;
    };
    app.dispatch(command);
}

pub fn cancel_edit(app: &mut AppState) {
    let Some(id) = app.editing_card().cloned() else {
        return;
    };
    let Some(current) = app.board.card(&id).map(|card| card.data.clone()) else {
        return;
    };
    if let Some(view) = app.view_mut(&id) {
        view.cancel(&current);
    }
}
