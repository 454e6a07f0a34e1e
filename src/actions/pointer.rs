use crate::app::{AppMode, AppState, Click, Drag};
use crate::board::BoardCommand;
use crate::ui::controls::{self, Control};
use std::time::{Duration, Instant};

use super::{card, view};

pub fn pointer_down(app: &mut AppState, column: u16, row: u16, at: Instant) {
    if app.mode == AppMode::Help {
        app.mode = AppMode::Normal;
        return;
    }
    // The keyboard owns the editing card until it is confirmed or cancelled.
    if app.editing_card().is_some() {
        return;
    }

    let area = app.canvas_area;
    if controls::add_button_rect(area).contains((column, row).into()) {
        card::add_card(app);
        return;
    }
    if let Some(control) = controls::hit_control(area, column, row) {
        match control {
            Control::ZoomIn => view::zoom_in(app),
            Control::ZoomOut => view::zoom_out(app),
            Control::Fit => view::fit_view(app),
        }
        return;
    }
    if app.canvas_relative(column, row).is_none() {
        return;
    }

    let Some(card) = app.card_at(column, row).cloned() else {
        app.select(None);
        app.last_click = None;
        if matches!(app.mode, AppMode::Connecting { .. }) {
            app.mode = AppMode::Normal;
        }
        app.drag = Some(Drag::Pan {
            last: (column, row),
        });
        return;
    };

    if let AppMode::Connecting { source, .. } = &app.mode {
        let source = source.clone();
        app.mode = AppMode::Normal;
        card::connect(app, source, card.id.clone());
        return;
    }

    let window = Duration::from_millis(app.config.double_click_ms);
    let is_double = app
        .last_click
        .as_ref()
        .is_some_and(|click| click.card == card.id && at.duration_since(click.at) <= window);

    app.select(Some(card.id.clone()));
    if is_double {
        app.last_click = None;
        app.drag = None;
        if let Some(view) = app.view_mut(&card.id) {
            view.begin_edit();
        }
        return;
    }
    app.last_click = Some(Click {
        at,
        card: card.id.clone(),
    });

    let rect = app.card_rect(&card);
    let on_bottom_edge = app
        .canvas_relative(column, row)
        .is_some_and(|(_, rel_row)| rel_row == rect.bottom() - 1);
    app.drag = Some(if on_bottom_edge {
        Drag::Connect { source: card.id }
    } else {
        Drag::Card {
            id: card.id,
            origin: card.position,
            start: (column, row),
        }
    });
}

pub fn pointer_drag(app: &mut AppState, column: u16, row: u16) {
    match app.drag.clone() {
        Some(Drag::Card { id, origin, start }) => {
            let (dx, dy) = app.viewport.cells_to_world(
                column as i32 - start.0 as i32,
                row as i32 - start.1 as i32,
            );
            app.last_click = None;
            app.dispatch(BoardCommand::MoveCard {
                id,
                position: origin.offset(dx, dy),
            });
        }
        Some(Drag::Pan { last }) => {
            app.viewport
                .pan_by(last.0 as i32 - column as i32, last.1 as i32 - row as i32);
            app.drag = Some(Drag::Pan {
                last: (column, row),
            });
        }
        Some(Drag::Connect { source }) => {
            app.set_message(format!("Connecting from {source}, release over a card"));
        }
        None => {}
    }
}

pub fn pointer_up(app: &mut AppState, column: u16, row: u16) {
    let Some(Drag::Connect { source }) = app.drag.take() else {
        return;
    };
    let Some(target) = app.card_at(column, row).map(|card| card.id.clone()) else {
        return;
    };
    // Releasing where the drag started is a click, not a link.
    if target != source {
        card::connect(app, source, target);
    }
}

pub fn scroll_zoom(app: &mut AppState, column: u16, row: u16, zoom_in: bool) {
    let Some(anchor) = app.canvas_relative(column, row) else {
        return;
    };
    let step = app.config.zoom_step;
    let factor = if zoom_in { step } else { 1.0 / step };
    app.viewport.zoom_by(factor, anchor);
}
