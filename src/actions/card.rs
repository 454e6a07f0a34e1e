use crate::app::{AppMode, AppState};
use crate::board::BoardCommand;
use crate::model::CardId;

pub fn add_card(app: &mut AppState) {
    if let Some(id) = app.dispatch(BoardCommand::AddCard) {
        app.select(Some(id));
        app.set_message("Card added");
    }
}

pub fn select_next(app: &mut AppState) {
    app.select_step(true);
}

pub fn select_previous(app: &mut AppState) {
    app.select_step(false);
}

pub fn delete_selected(app: &mut AppState) {
    let Some(id) = app.selected.clone() else {
        app.set_message("No card selected");
        return;
    };
    let Some(command) = app.view(&id).map(|view| view.delete()) else {
        return;
    };
    app.dispatch(command);
    app.set_message("Card deleted");
}

/// Moves the selected card by whole grid steps.
pub fn nudge_selected(app: &mut AppState, dx: i32, dy: i32) {
    let step = app.config.grid_gap;
    let Some(card) = app.selected_card() else {
        return;
    };
    let command = BoardCommand::MoveCard {
        id: card.id.clone(),
        position: card.position.offset(dx as f64 * step, dy as f64 * step),
    };
    app.dispatch(command);
}

pub fn start_connect(app: &mut AppState) {
    let Some(source) = app.selected.clone() else {
        app.set_message("Select a card to connect from");
        return;
    };
    let target = next_target(app, &source, None, true);
    app.mode = AppMode::Connecting { source, target };
}

pub fn cycle_connect_target(app: &mut AppState, forward: bool) {
    if let AppMode::Connecting { source, target } = &app.mode {
        let next = next_target(app, source, target.as_ref(), forward);
        let source = source.clone();
        app.mode = AppMode::Connecting {
            source,
            target: next,
        };
    }
}

pub fn confirm_connect(app: &mut AppState) {
    let AppMode::Connecting { source, target } = std::mem::replace(&mut app.mode, AppMode::Normal)
    else {
        return;
    };
    match target {
        Some(target) => connect(app, source, target),
        None => app.set_message("Nothing to connect to"),
    }
}

pub fn cancel_connect(app: &mut AppState) {
    app.mode = AppMode::Normal;
}

pub fn connect(app: &mut AppState, source: CardId, target: CardId) {
    if app.board.add_connection(source.clone(), target.clone()) {
        app.set_message(format!("Connected {source} to {target}"));
    } else {
        app.set_message(format!("Cannot connect {source} to {target}"));
    }
}

/// Removes the links from the connect source to the current target and
/// leaves connect mode.
pub fn disconnect_target(app: &mut AppState) {
    let AppMode::Connecting { source, target } = std::mem::replace(&mut app.mode, AppMode::Normal)
    else {
        return;
    };
    let Some(target) = target else {
        app.set_message("Nothing to disconnect");
        return;
    };
    if app.board.remove_connection(&source, &target) {
        app.set_message(format!("Disconnected {source} from {target}"));
    } else {
        app.set_message(format!("{source} is not connected to {target}"));
    }
}

// Cycles through every card except the source, in board order.
fn next_target(
    app: &AppState,
    source: &CardId,
    current: Option<&CardId>,
    forward: bool,
) -> Option<CardId> {
    let candidates: Vec<&CardId> = app
        .board
        .cards()
        .iter()
        .map(|card| &card.id)
        .filter(|id| *id != source)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let index = current.and_then(|current| candidates.iter().position(|id| *id == current));
    let next = match (index, forward) {
        (None, true) => 0,
        (None, false) => candidates.len() - 1,
        (Some(i), true) => (i + 1) % candidates.len(),
        (Some(i), false) => (i + candidates.len() - 1) % candidates.len(),
    };
    Some(candidates[next].clone())
}
