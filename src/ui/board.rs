use crate::app::{AppMode, AppState};
use crate::model::{Card, Position};
use crate::ui::canvas::BufferCanvas;
use crate::ui::card::{CardRenderer, Highlight};
use crate::ui::connections::ConnectionRenderer;
use crate::ui::constants::{minimap, GRID_DOT, MIN_GRID_SPACING_X, MIN_GRID_SPACING_Y};
use crate::ui::controls::{self, ADD_BUTTON_LABEL};
use crate::ui::minimap::MinimapRenderer;
use crate::viewport::{CELL_HEIGHT, CELL_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Board renderer: grid, connections, cards, then the overlays
pub struct BoardRenderer<'a> {
    app: &'a AppState,
}

impl<'a> BoardRenderer<'a> {
    pub fn new(app: &'a AppState) -> Self {
        Self { app }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let canvas = self.draw(area);
        frame.render_widget(Paragraph::new(canvas.to_lines()), area);
    }

    pub fn draw(&self, area: Rect) -> BufferCanvas {
        let mut canvas = BufferCanvas::new(area.width as usize, area.height as usize);

        if self.app.config.show_grid {
            self.draw_grid(&mut canvas);
        }
        // Connections first so cards cover their ends
        self.draw_connections(&mut canvas);
        for card in self.app.board.cards() {
            self.draw_card(&mut canvas, card);
        }
        self.draw_overlays(&mut canvas, area);

        canvas
    }

    fn draw_grid(&self, canvas: &mut BufferCanvas) {
        let viewport = &self.app.viewport;
        let zoom = viewport.zoom();
        let mut gap = self.app.config.grid_gap;
        while gap * zoom / CELL_WIDTH < MIN_GRID_SPACING_X
            || gap * zoom / CELL_HEIGHT < MIN_GRID_SPACING_Y
        {
            gap *= 2.0;
        }

        let style = Style::default().fg(Color::DarkGray);
        let start = viewport.to_world(0, 0);
        let end = viewport.to_world(canvas.width as i32, canvas.height as i32);
        let mut wy = (start.y / gap).ceil() * gap;
        while wy < end.y {
            let mut wx = (start.x / gap).ceil() * gap;
            while wx < end.x {
                let (col, row) = viewport.to_screen(Position::new(wx, wy));
                canvas.put(col, row, GRID_DOT, style);
                wx += gap;
            }
            wy += gap;
        }
    }

    fn draw_connections(&self, canvas: &mut BufferCanvas) {
        let board = &self.app.board;
        for connection in board.connections() {
            let (Some(source), Some(target)) =
                (board.card(&connection.source), board.card(&connection.target))
            else {
                continue;
            };
            let touches_selection = self
                .app
                .selected
                .as_ref()
                .is_some_and(|id| connection.touches(id));
            let style = if touches_selection {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ConnectionRenderer::draw(
                canvas,
                self.app.card_rect(source),
                self.app.card_rect(target),
                style,
            );
        }
    }

    fn draw_card(&self, canvas: &mut BufferCanvas, card: &Card) {
        let Some(view) = self.app.view(&card.id) else {
            return;
        };
        let rect = self.app.card_rect(card);
        if rect.right() < 0
            || rect.bottom() < 0
            || rect.x >= canvas.width as i32
            || rect.y >= canvas.height as i32
        {
            return;
        }
        CardRenderer::new(view, rect, self.highlight(card)).draw(canvas);
    }

    fn highlight(&self, card: &Card) -> Highlight {
        if self.app.view(&card.id).is_some_and(|view| view.is_editing()) {
            return Highlight::Editing;
        }
        if let AppMode::Connecting { source, target } = &self.app.mode {
            if source == &card.id {
                return Highlight::ConnectSource;
            }
            if target.as_ref() == Some(&card.id) {
                return Highlight::ConnectTarget;
            }
        }
        if self.app.selected.as_ref() == Some(&card.id) {
            Highlight::Selected
        } else {
            Highlight::None
        }
    }

    fn draw_overlays(&self, canvas: &mut BufferCanvas, area: Rect) {
        let relative = |rect: Rect| ((rect.x - area.x) as i32, (rect.y - area.y) as i32);
        let button = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let control = Style::default().fg(Color::Black).bg(Color::Gray);

        let (x, y) = relative(controls::add_button_rect(area));
        canvas.draw_styled_text(x, y, ADD_BUTTON_LABEL, button);

        for (kind, rect) in controls::control_rects(area) {
            let (x, y) = relative(rect);
            canvas.draw_styled_text(x, y, kind.label(), control);
        }

        if self.app.show_minimap {
            if let Some(rect) = controls::minimap_rect(area, minimap::WIDTH, minimap::HEIGHT) {
                let (x, y) = relative(rect);
                MinimapRenderer::new(self.app).draw(
                    canvas,
                    x,
                    y,
                    rect.width as i32,
                    rect.height as i32,
                );
            }
        }
    }
}
