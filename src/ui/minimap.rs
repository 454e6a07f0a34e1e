use crate::app::AppState;
use crate::model::{Bounds, Position};
use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::{junction, minimap};
use ratatui::style::{Color, Style};

/// Overview of the whole board in the bottom-right corner: one mark per
/// card plus a shaded box for the part of the world currently on screen.
pub struct MinimapRenderer<'a> {
    app: &'a AppState,
}

impl<'a> MinimapRenderer<'a> {
    pub fn new(app: &'a AppState) -> Self {
        Self { app }
    }

    /// `x`/`y` are canvas-relative.
    pub fn draw(&self, canvas: &mut BufferCanvas, x: i32, y: i32, width: i32, height: i32) {
        let frame = Style::default().fg(Color::DarkGray);
        canvas.fill(x, y, width, height, ' ', Style::default());
        canvas.hline(y, x, x + width - 1, junction::HORIZONTAL, frame);
        canvas.hline(y + height - 1, x, x + width - 1, junction::HORIZONTAL, frame);
        canvas.vline(x, y, y + height - 1, junction::VERTICAL, frame);
        canvas.vline(x + width - 1, y, y + height - 1, junction::VERTICAL, frame);
        canvas.put(x, y, junction::TOP_LEFT, frame);
        canvas.put(x + width - 1, y, junction::TOP_RIGHT, frame);
        canvas.put(x, y + height - 1, junction::BOTTOM_LEFT, frame);
        canvas.put(x + width - 1, y + height - 1, junction::BOTTOM_RIGHT, frame);

        let inner_w = width - 2;
        let inner_h = height - 2;
        if inner_w <= 0 || inner_h <= 0 {
            return;
        }

        let visible = self.visible_world();
        let world = self
            .app
            .board
            .bounds()
            .map_or(visible, |cards| cards.union(visible));
        let scale_x = inner_w as f64 / world.width().max(1.0);
        let scale_y = inner_h as f64 / world.height().max(1.0);
        let to_cell = |p: Position| {
            let col = ((p.x - world.min.x) * scale_x).floor() as i32;
            let row = ((p.y - world.min.y) * scale_y).floor() as i32;
            (
                x + 1 + col.clamp(0, inner_w - 1),
                y + 1 + row.clamp(0, inner_h - 1),
            )
        };

        let shade = Style::default().bg(Color::DarkGray);
        let (left, top) = to_cell(visible.min);
        let (right, bottom) = to_cell(visible.max);
        canvas.fill(left, top, right - left + 1, bottom - top + 1, ' ', shade);

        for card in self.app.board.cards() {
            let (col, row) = to_cell(card.bounds().center());
            let style = if self.app.selected.as_ref() == Some(&card.id) {
                Style::default().fg(Color::Cyan).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };
            canvas.put(col, row, minimap::CARD, style);
        }
    }

    fn visible_world(&self) -> Bounds {
        let area = self.app.canvas_area;
        let viewport = &self.app.viewport;
        Bounds {
            min: viewport.to_world(0, 0),
            max: viewport.to_world(area.width as i32, area.height as i32),
        }
    }
}
