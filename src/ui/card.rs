use crate::card_view::{CardMode, CardView, Field};
use crate::model::{NO_CONTENT, UNTITLED};
use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::{junction, CURSOR_INDICATOR, ELLIPSIS, HANDLE};
use crate::ui::text::TextWrapper;
use crate::viewport::ScreenRect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

// Cards smaller than this are drawn as solid blocks
const MIN_FRAMED_WIDTH: i32 = 5;
const MIN_FRAMED_HEIGHT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Selected,
    Editing,
    ConnectSource,
    ConnectTarget,
}

impl Highlight {
    fn border_style(self) -> Style {
        match self {
            Highlight::None => Style::default().fg(Color::Gray),
            Highlight::Selected => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Highlight::Editing => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Highlight::ConnectSource => Style::default().fg(Color::Magenta),
            Highlight::ConnectTarget => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Draws one card view into a canvas-relative rectangle.
pub struct CardRenderer<'a> {
    view: &'a CardView,
    rect: ScreenRect,
    highlight: Highlight,
}

impl<'a> CardRenderer<'a> {
    pub fn new(view: &'a CardView, rect: ScreenRect, highlight: Highlight) -> Self {
        Self {
            view,
            rect,
            highlight,
        }
    }

    pub fn draw(&self, canvas: &mut BufferCanvas) {
        let border = self.highlight.border_style();
        let ScreenRect {
            x,
            y,
            width,
            height,
        } = self.rect;

        if width < MIN_FRAMED_WIDTH || height < MIN_FRAMED_HEIGHT {
            canvas.fill(x, y, width, height, junction::BLOCK, border);
            return;
        }

        canvas.fill(x + 1, y + 1, width - 2, height - 2, ' ', Style::default());
        self.draw_frame(canvas, border);

        let inner = (width - 4) as usize;
        let body_rows = (height - 3) as usize;
        match *self.view.mode() {
            CardMode::Display => self.draw_display(canvas, inner, body_rows),
            CardMode::Editing { field, cursor } => {
                self.draw_editing(canvas, inner, body_rows, field, cursor)
            }
        }
    }

    fn draw_frame(&self, canvas: &mut BufferCanvas, style: Style) {
        let ScreenRect {
            x,
            y,
            width,
            height,
        } = self.rect;
        let right = x + width - 1;
        let bottom = y + height - 1;

        canvas.hline(y, x, right, junction::HORIZONTAL, style);
        canvas.hline(bottom, x, right, junction::HORIZONTAL, style);
        canvas.vline(x, y, bottom, junction::VERTICAL, style);
        canvas.vline(right, y, bottom, junction::VERTICAL, style);
        canvas.put(x, y, junction::TOP_LEFT, style);
        canvas.put(right, y, junction::TOP_RIGHT, style);
        canvas.put(x, bottom, junction::BOTTOM_LEFT, style);
        canvas.put(right, bottom, junction::BOTTOM_RIGHT, style);
        canvas.put(self.rect.center_x(), bottom, HANDLE, style);
    }

    fn draw_display(&self, canvas: &mut BufferCanvas, inner: usize, body_rows: usize) {
        let title_style = Style::default().add_modifier(Modifier::BOLD);
        let placeholder_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);

        let (title, style) = match self.view.title() {
            "" => (UNTITLED, placeholder_style),
            title => (title, title_style),
        };
        self.draw_row(canvas, 0, &TextWrapper::truncate(title, inner), style);

        let (content, style) = match self.view.content() {
            "" => (NO_CONTENT, placeholder_style),
            content => (content, Style::default()),
        };
        let lines = TextWrapper::wrap(content, inner);
        let overflow = lines.len() > body_rows;
        for (i, line) in lines.iter().take(body_rows).enumerate() {
            let text = if overflow && i + 1 == body_rows {
                let mut cut = TextWrapper::clip(line, inner.saturating_sub(2)).to_string();
                cut.push(' ');
                cut.push(ELLIPSIS);
                cut
            } else {
                line.clone()
            };
            self.draw_row(canvas, i + 1, &text, style);
        }
    }

    // Editing shows raw lines, scrolled so the cursor stays visible.
    fn draw_editing(
        &self,
        canvas: &mut BufferCanvas,
        inner: usize,
        body_rows: usize,
        field: Field,
        cursor: usize,
    ) {
        let title_style = Style::default().add_modifier(Modifier::BOLD);
        let title = match field {
            Field::Title => cursor_line(self.view.title(), cursor, inner),
            Field::Content => TextWrapper::clip(self.view.title(), inner).to_string(),
        };
        self.draw_row(canvas, 0, &title, title_style);

        let content = self.view.content();
        let lines: Vec<&str> = content.split('\n').collect();
        let (cursor_row, cursor_col) = match field {
            Field::Content => line_and_column(content, cursor),
            Field::Title => (0, 0),
        };
        let first = (cursor_row + 1).saturating_sub(body_rows);

        for (row, (i, line)) in lines.iter().enumerate().skip(first).take(body_rows).enumerate() {
            let text = if field == Field::Content && i == cursor_row {
                cursor_line(line, cursor_col, inner)
            } else {
                TextWrapper::clip(line, inner).to_string()
            };
            self.draw_row(canvas, row + 1, &text, Style::default());
        }
    }

    fn draw_row(&self, canvas: &mut BufferCanvas, row: usize, text: &str, style: Style) {
        let y = self.rect.y + 1 + row as i32;
        canvas.draw_styled_text(self.rect.x + 2, y, text, style);
    }
}

/// Line index and column (in characters) of a character cursor.
fn line_and_column(text: &str, cursor: usize) -> (usize, usize) {
    let before: String = text.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count());
    (row, col)
}

/// `line` with the cursor indicator at `col`, scrolled to fit `width`.
fn cursor_line(line: &str, col: usize, width: usize) -> String {
    let split = line
        .char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i);
    let head = format!("{}{}", &line[..split], CURSOR_INDICATOR);
    if head.width() > width {
        return TextWrapper::tail(&head, width).to_string();
    }
    let full = format!("{}{}", head, &line[split..]);
    TextWrapper::clip(&full, width).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, CardData, CardId, Position};

    fn view(title: &str, content: &str) -> CardView {
        CardView::new(&Card::new(
            CardId::from("c"),
            Position::default(),
            CardData::new(title, content),
        ))
    }

    fn render(view: &CardView, width: i32, height: i32, highlight: Highlight) -> String {
        let mut canvas = BufferCanvas::new(width as usize, height as usize);
        let rect = ScreenRect {
            x: 0,
            y: 0,
            width,
            height,
        };
        CardRenderer::new(view, rect, highlight).draw(&mut canvas);
        (0..canvas.height)
            .map(|y| canvas.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_frame_and_text() {
        let card = view("Groceries", "eggs\nmilk and bread");
        insta::assert_snapshot!(render(&card, 16, 6, Highlight::None), @r"
        ╭──────────────╮
        │ Groceries    │
        │ eggs         │
        │ milk and     │
        │ bread        │
        ╰───────•──────╯
        ");
    }

    #[test]
    fn test_placeholders_for_empty_fields() {
        let card = view("", "");
        let text = render(&card, 16, 5, Highlight::None);
        assert!(text.contains(UNTITLED));
        assert!(text.contains(NO_CONTENT));
    }

    #[test]
    fn test_overflowing_content_is_marked() {
        let card = view("T", "one\ntwo\nthree\nfour");
        let text = render(&card, 12, 5, Highlight::None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "│ one      │");
        assert_eq!(lines[3], "│ two …    │");
    }

    #[test]
    fn test_editing_shows_cursor() {
        let mut card = view("Plan", "a\nb");
        card.begin_edit();
        let text = render(&card, 12, 5, Highlight::Editing);
        assert!(text.lines().nth(1).unwrap().contains("Plan▌"));

        card.switch_field();
        let text = render(&card, 12, 5, Highlight::Editing);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("Plan"));
        assert!(!lines[1].contains('▌'));
        // Two body rows, cursor on the last line
        assert_eq!(lines[2], "│ a        │");
        assert_eq!(lines[3], "│ b▌       │");
    }

    #[test]
    fn test_editing_scrolls_long_title() {
        let mut card = view("abcdefghijklmnop", "");
        card.begin_edit();
        let text = render(&card, 10, 4, Highlight::Editing);
        assert_eq!(text.lines().nth(1).unwrap(), "│ lmnop▌ │");
    }

    #[test]
    fn test_tiny_card_is_a_block() {
        let card = view("x", "y");
        let text = render(&card, 2, 2, Highlight::None);
        assert_eq!(text, "██\n██");
    }

    #[test]
    fn test_line_and_column() {
        assert_eq!(line_and_column("ab\ncd", 0), (0, 0));
        assert_eq!(line_and_column("ab\ncd", 2), (0, 2));
        assert_eq!(line_and_column("ab\ncd", 3), (1, 0));
        assert_eq!(line_and_column("ab\ncd", 5), (1, 2));
    }
}
