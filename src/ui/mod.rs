use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub mod board;
pub mod canvas;
pub mod card;
pub mod connections;
pub mod constants;
pub mod controls;
pub mod help;
pub mod minimap;
pub mod status_line;
pub mod text;


use board::BoardRenderer;
use constants::HEADER_TITLE;
use help::HelpRenderer;
use status_line::StatusLineRenderer;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    // Pointer hit-testing works against the last drawn canvas
    app.canvas_area = chunks[1];
    if app.needs_fit {
        app.fit_view();
        app.needs_fit = false;
    }

    render_header(frame, chunks[0]);
    BoardRenderer::new(app).render(frame, chunks[1]);
    if app.mode == AppMode::Help {
        HelpRenderer::render(frame, chunks[1]);
    }
    StatusLineRenderer::render(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Span::styled(
        format!(" {HEADER_TITLE} "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(vec![title])), area);
}
