//! Per-card presentation state.
//!
//! A [`CardView`] starts in Display mode holding a copy of its card's title
//! and content. Entering Editing mode lets the user change those copies;
//! confirming turns them into a [`BoardCommand::UpdateCard`], cancelling
//! throws them away. The view never mutates the board itself.

use crate::board::BoardCommand;
use crate::model::{Card, CardData, CardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Display,
    /// `cursor` counts characters, not bytes.
    Editing { field: Field, cursor: usize },
}

#[derive(Debug, Clone)]
pub struct CardView {
    id: CardId,
    mode: CardMode,
    title: String,
    content: String,
}

impl CardView {
    pub fn new(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            mode: CardMode::Display,
            title: card.data.title.clone(),
            content: card.data.content.clone(),
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Local copies as card data.
    pub fn data(&self) -> CardData {
        CardData::new(self.title.clone(), self.content.clone())
    }

    /// Picks up external changes. Ignored while an edit is in progress.
    pub fn sync(&mut self, data: &CardData) {
        if self.is_editing() {
            return;
        }
        if self.title != data.title {
            self.title.clone_from(&data.title);
        }
        if self.content != data.content {
            self.content.clone_from(&data.content);
        }
    }

    pub fn begin_edit(&mut self) {
        if self.is_editing() {
            return;
        }
        self.mode = CardMode::Editing {
            field: Field::Title,
            cursor: self.title.chars().count(),
        };
    }

    /// Leaves Editing and hands back the update for the board.
    pub fn confirm(&mut self) -> Option<BoardCommand> {
        if !self.is_editing() {
            return None;
        }
        self.mode = CardMode::Display;
        Some(BoardCommand::UpdateCard {
            id: self.id.clone(),
            data: self.data(),
        })
    }

    /// Leaves Editing and restores the board's current values.
    pub fn cancel(&mut self, current: &CardData) {
        self.mode = CardMode::Display;
        self.sync(current);
    }

    pub fn delete(&self) -> BoardCommand {
        BoardCommand::DeleteCard {
            id: self.id.clone(),
        }
    }

    pub fn switch_field(&mut self) {
        if let CardMode::Editing { field, cursor } = &mut self.mode {
            let (next, text) = match field {
                Field::Title => (Field::Content, &self.content),
                Field::Content => (Field::Title, &self.title),
            };
            *field = next;
            *cursor = text.chars().count();
        }
    }

    fn buffer_mut(&mut self) -> Option<(&mut String, &mut usize, Field)> {
        match &mut self.mode {
            CardMode::Editing { field, cursor } => {
                let buffer = match field {
                    Field::Title => &mut self.title,
                    Field::Content => &mut self.content,
                };
                Some((buffer, cursor, *field))
            }
            CardMode::Display => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            buffer.insert(byte_index(buffer, *cursor), c);
            *cursor += 1;
        }
    }

    /// In the title, moves on to the content; in the content, breaks the line.
    pub fn insert_newline(&mut self) {
        match self.mode {
            CardMode::Editing {
                field: Field::Title,
                ..
            } => self.switch_field(),
            CardMode::Editing {
                field: Field::Content,
                ..
            } => {
                if let Some((buffer, cursor, _)) = self.buffer_mut() {
                    buffer.insert(byte_index(buffer, *cursor), '\n');
                    *cursor += 1;
                }
            }
            CardMode::Display => {}
        }
    }

    /// Inserts pasted text. The title stays on one line.
    pub fn insert_str(&mut self, text: &str) {
        if let Some((buffer, cursor, field)) = self.buffer_mut() {
            let cleaned = match field {
                Field::Title => text.replace("\r\n", " ").replace(['\n', '\r'], " "),
                Field::Content => text.replace('\r', ""),
            }
            .replace('\t', "  ");
            buffer.insert_str(byte_index(buffer, *cursor), &cleaned);
            *cursor += cleaned.chars().count();
        }
    }

    pub fn backspace(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            if *cursor > 0 {
                *cursor -= 1;
                buffer.remove(byte_index(buffer, *cursor));
            }
        }
    }

    pub fn delete_forward(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            if *cursor < buffer.chars().count() {
                buffer.remove(byte_index(buffer, *cursor));
            }
        }
    }

    pub fn move_left(&mut self) {
        if let Some((_, cursor, _)) = self.buffer_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            if *cursor < buffer.chars().count() {
                *cursor += 1;
            }
        }
    }

    pub fn move_home(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            *cursor = line_start(buffer, *cursor);
        }
    }

    pub fn move_end(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            *cursor = line_end(buffer, *cursor);
        }
    }

    pub fn move_word_left(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            *cursor = word_start_before(buffer, *cursor);
        }
    }

    pub fn move_word_right(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            *cursor = word_end_after(buffer, *cursor);
        }
    }

    pub fn delete_word_backward(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            let start = word_start_before(buffer, *cursor);
            let range = byte_index(buffer, start)..byte_index(buffer, *cursor);
            buffer.replace_range(range, "");
            *cursor = start;
        }
    }

    pub fn delete_to_end(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            let end = line_end(buffer, *cursor);
            let range = byte_index(buffer, *cursor)..byte_index(buffer, end);
            buffer.replace_range(range, "");
        }
    }

    pub fn delete_to_start(&mut self) {
        if let Some((buffer, cursor, _)) = self.buffer_mut() {
            let start = line_start(buffer, *cursor);
            let range = byte_index(buffer, start)..byte_index(buffer, *cursor);
            buffer.replace_range(range, "");
            *cursor = start;
        }
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}

fn line_start(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos > 0 && chars[pos - 1] != '\n' {
        pos -= 1;
    }
    pos
}

fn line_end(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos < chars.len() && chars[pos] != '\n' {
        pos += 1;
    }
    pos
}

fn word_start_before(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    pos
}

fn word_end_after(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos < chars.len() && !chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn view(title: &str, content: &str) -> CardView {
        CardView::new(&Card::new(
            CardId::from("c1"),
            Position::default(),
            CardData::new(title, content),
        ))
    }

    fn cursor(view: &CardView) -> usize {
        match view.mode() {
            CardMode::Editing { cursor, .. } => *cursor,
            CardMode::Display => panic!("not editing"),
        }
    }

    fn field(view: &CardView) -> Field {
        match view.mode() {
            CardMode::Editing { field, .. } => *field,
            CardMode::Display => panic!("not editing"),
        }
    }

    #[test]
    fn test_starts_in_display() {
        let v = view("Hello", "World");
        assert_eq!(v.mode(), &CardMode::Display);
        assert_eq!(v.title(), "Hello");
        assert_eq!(v.content(), "World");
    }

    #[test]
    fn test_begin_edit_puts_cursor_at_end_of_title() {
        let mut v = view("Héllo", "");
        v.begin_edit();
        assert!(v.is_editing());
        assert_eq!(field(&v), Field::Title);
        assert_eq!(cursor(&v), 5);
    }

    #[test]
    fn test_confirm_produces_update() {
        let mut v = view("Old", "body");
        v.begin_edit();
        v.backspace();
        v.backspace();
        v.backspace();
        for c in "New".chars() {
            v.insert_char(c);
        }

        let command = v.confirm().unwrap();
        assert_eq!(
            command,
            BoardCommand::UpdateCard {
                id: CardId::from("c1"),
                data: CardData::new("New", "body"),
            }
        );
        assert!(!v.is_editing());
    }

    #[test]
    fn test_confirm_outside_edit_is_none() {
        let mut v = view("a", "b");
        assert!(v.confirm().is_none());
    }

    #[test]
    fn test_cancel_reverts_local_copies() {
        let mut v = view("Keep", "me");
        v.begin_edit();
        v.insert_char('!');
        v.switch_field();
        v.insert_str(" please");
        assert_eq!(v.title(), "Keep!");
        assert_eq!(v.content(), "me please");

        v.cancel(&CardData::new("Keep", "me"));
        assert_eq!(v.mode(), &CardMode::Display);
        assert_eq!(v.title(), "Keep");
        assert_eq!(v.content(), "me");
    }

    #[test]
    fn test_cancel_picks_up_newer_board_values() {
        let mut v = view("Mine", "");
        v.begin_edit();
        v.cancel(&CardData::new("Theirs", "changed meanwhile"));
        assert_eq!(v.title(), "Theirs");
        assert_eq!(v.content(), "changed meanwhile");
    }

    #[test]
    fn test_sync_applies_in_display_only() {
        let mut v = view("A", "B");
        v.sync(&CardData::new("A2", "B2"));
        assert_eq!(v.title(), "A2");

        v.begin_edit();
        v.insert_char('x');
        v.sync(&CardData::new("A3", "B3"));
        assert_eq!(v.title(), "A2x");
        assert_eq!(v.content(), "B2");
    }

    #[test]
    fn test_delete_command() {
        let v = view("", "");
        assert_eq!(
            v.delete(),
            BoardCommand::DeleteCard {
                id: CardId::from("c1")
            }
        );
    }

    #[test]
    fn test_enter_in_title_moves_to_content() {
        let mut v = view("T", "body");
        v.begin_edit();
        v.insert_char('\n');
        assert_eq!(field(&v), Field::Content);
        assert_eq!(cursor(&v), 4);
        assert_eq!(v.title(), "T");

        v.insert_newline();
        v.insert_char('x');
        assert_eq!(v.content(), "body\nx");
    }

    #[test]
    fn test_paste_into_title_flattens_lines() {
        let mut v = view("", "");
        v.begin_edit();
        v.insert_str("one\r\ntwo\tthree");
        assert_eq!(v.title(), "one two  three");
        assert_eq!(cursor(&v), 14);
    }

    #[test]
    fn test_unicode_editing() {
        let mut v = view("añb", "");
        v.begin_edit();
        v.move_left();
        v.backspace();
        assert_eq!(v.title(), "ab");
        v.insert_char('ü');
        assert_eq!(v.title(), "aüb");
        v.delete_forward();
        assert_eq!(v.title(), "aü");
    }

    #[test]
    fn test_home_end_are_line_aware_in_content() {
        let mut v = view("", "first\nsecond");
        v.begin_edit();
        v.switch_field();
        v.move_home();
        assert_eq!(cursor(&v), 6);
        v.move_left();
        v.move_home();
        assert_eq!(cursor(&v), 0);
        v.move_end();
        assert_eq!(cursor(&v), 5);
    }

    #[test]
    fn test_word_movement_and_deletion() {
        let mut v = view("hello big world", "");
        v.begin_edit();
        v.move_word_left();
        assert_eq!(cursor(&v), 10);
        v.move_word_left();
        assert_eq!(cursor(&v), 6);
        v.move_word_right();
        assert_eq!(cursor(&v), 10);

        v.move_end();
        v.delete_word_backward();
        assert_eq!(v.title(), "hello big ");
        assert_eq!(cursor(&v), 10);
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut v = view("abcdef", "");
        v.begin_edit();
        v.move_left();
        v.move_left();
        v.delete_to_end();
        assert_eq!(v.title(), "abcd");
        v.move_left();
        v.delete_to_start();
        assert_eq!(v.title(), "d");
        assert_eq!(cursor(&v), 0);
    }

    #[test]
    fn test_edits_ignored_in_display() {
        let mut v = view("same", "");
        v.insert_char('x');
        v.backspace();
        v.insert_str("paste");
        assert_eq!(v.title(), "same");
    }

    #[test]
    fn test_cursor_clamped_at_edges() {
        let mut v = view("ab", "");
        v.begin_edit();
        v.move_right();
        assert_eq!(cursor(&v), 2);
        v.move_home();
        v.move_left();
        v.backspace();
        assert_eq!(cursor(&v), 0);
        assert_eq!(v.title(), "ab");
    }
}
