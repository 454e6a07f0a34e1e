use crate::ui::constants::{CharBuffer, StyleBuffer, WIDE_CONTINUATION};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// Character and style grid the board is drawn into before it becomes a
/// `Paragraph`. Coordinates are signed so shapes may start off-canvas;
/// anything outside the grid is clipped.
pub struct BufferCanvas {
    pub char_buffer: CharBuffer,
    pub style_buffer: StyleBuffer,
    pub width: usize,
    pub height: usize,
}

impl BufferCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            char_buffer: vec![vec![' '; width]; height],
            style_buffer: vec![vec![Style::default(); width]; height],
            width,
            height,
        }
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if let Some((x, y)) = self.index(x, y) {
            self.char_buffer[y][x] = ch;
            self.style_buffer[y][x] = style;
        }
    }

    /// Draws `text` starting at `(x, y)`, returning the column after the
    /// last cell written. Wide characters take two cells.
    pub fn draw_styled_text(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if width == 2 && !self.in_bounds(col + 1, y) {
                // Half a wide glyph would shift the rest of the row
                self.put(col, y, ' ', style);
            } else {
                self.put(col, y, ch, style);
                if width == 2 {
                    self.put(col + 1, y, WIDE_CONTINUATION, style);
                }
            }
            col += width;
        }
        col
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) -> i32 {
        self.draw_styled_text(x, y, text, Style::default())
    }

    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, ch: char, style: Style) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (left, right) = clamp_span(x, x + width - 1, self.width);
        let (top, bottom) = clamp_span(y, y + height - 1, self.height);
        for row in top..=bottom {
            for col in left..=right {
                self.put(col, row, ch, style);
            }
        }
    }

    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, ch: char, style: Style) {
        let (from, to) = clamp_span(x0, x1, self.width);
        for x in from..=to {
            self.put(x, y, ch, style);
        }
    }

    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, ch: char, style: Style) {
        let (from, to) = clamp_span(y0, y1, self.height);
        for y in from..=to {
            self.put(x, y, ch, style);
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn char_at(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|(x, y)| self.char_buffer[y][x])
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// One row of text per buffer row, for assertions and snapshots.
    pub fn row_text(&self, y: usize) -> String {
        self.char_buffer[y]
            .iter()
            .filter(|&&ch| ch != WIDE_CONTINUATION)
            .collect()
    }

    pub fn to_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        for (y, row) in self.char_buffer.iter().enumerate() {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for (x, &ch) in row.iter().enumerate() {
                if ch == WIDE_CONTINUATION {
                    continue;
                }
                let style = self.style_buffer[y][x];
                if style != current_style {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text.clone(), current_style));
                        current_text.clear();
                    }
                    current_style = style;
                }
                current_text.push(ch);
            }

            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}

// Orders the endpoints and keeps them just around the visible range, so
// far off-canvas lines cost nothing.
fn clamp_span(a: i32, b: i32, len: usize) -> (i32, i32) {
    let limit = len as i32;
    (a.min(b).max(-1), a.max(b).min(limit))
}
