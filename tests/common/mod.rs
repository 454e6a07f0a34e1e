use corkboard::{AppConfig, AppState, CardId};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use std::collections::HashSet;

#[allow(dead_code)]
pub fn welcome_id() -> CardId {
    CardId::from("1")
}

#[allow(dead_code)]
/// App with a known canvas so pointer positions are predictable: the
/// canvas starts on terminal row 1 and is 100 × 30 cells.
pub fn create_test_app() -> AppState {
    create_test_app_with(AppConfig::default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: AppConfig) -> AppState {
    let mut app = AppState::new(config);
    app.canvas_area = Rect::new(0, 1, 100, 30);
    app.needs_fit = false;
    app
}

/// Config with the decorations that make rendered frames noisy turned off.
#[allow(dead_code)]
pub fn plain_config() -> AppConfig {
    AppConfig {
        show_grid: false,
        show_minimap: false,
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
pub fn card_ids(app: &AppState) -> HashSet<CardId> {
    app.board.cards().iter().map(|card| card.id.clone()).collect()
}

/// Renders one frame and returns it row by row, trailing blanks trimmed.
#[allow(dead_code)]
pub fn render_to_lines(app: &mut AppState, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| corkboard::ui::render(frame, app))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(card_ids(&app), HashSet::from([welcome_id()]));
        assert!(!app.needs_fit);
    }
}
