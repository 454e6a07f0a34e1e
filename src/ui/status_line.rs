use crate::app::{AppMode, AppState};
use crate::card_view::{CardMode, Field};
use crate::ui::constants::{STATUS_CONNECT_PREFIX, STATUS_EDIT_PREFIX};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub fn content_and_style(app: &AppState) -> (String, Style) {
        if app.mode == AppMode::Help {
            return Self::render_help_mode();
        }
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }
        if let Some(status) = Self::render_edit_mode(app) {
            return status;
        }
        match &app.mode {
            AppMode::Connecting { source, target } => {
                let linked = target
                    .as_ref()
                    .is_some_and(|target| app.board.is_connected(source, target));
                let target = target.as_ref().map_or("?", |id| id.as_str());
                let marker = if linked { " (linked)" } else { "" };
                let content = format!(
                    "{STATUS_CONNECT_PREFIX}{source} -> {target}{marker} | Tab next, Enter connect, x disconnect, Esc cancel"
                );
                (content, Self::active_style())
            }
            _ => Self::render_normal_mode(app),
        }
    }

    fn render_normal_mode(app: &AppState) -> (String, Style) {
        let content = format!(
            "Bulletin Board | {} cards | {} connections | zoom {:.0}% | ? help",
            app.board.len(),
            app.board.connections().len(),
            app.viewport.zoom() * 100.0
        );
        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }

    fn render_edit_mode(app: &AppState) -> Option<(String, Style)> {
        let id = app.editing_card()?;
        let CardMode::Editing { field, .. } = app.view(id)?.mode() else {
            return None;
        };
        let field = match field {
            Field::Title => "title",
            Field::Content => "content",
        };
        let content = format!(
            "{STATUS_EDIT_PREFIX}{id} [{field}] | Tab switch field, Ctrl-S save, Esc cancel"
        );
        Some((content, Self::active_style()))
    }

    fn render_help_mode() -> (String, Style) {
        (
            String::from("Press ESC or q to close help"),
            Self::active_style(),
        )
    }

    fn active_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}
