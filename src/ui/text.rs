use crate::ui::constants::ELLIPSIS;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Text layout helpers for card bodies
pub struct TextWrapper;

impl TextWrapper {
    /// Word-wraps each line of `text` separately, so explicit line breaks
    /// survive. Words wider than `max_width` are split.
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let max_width = max_width.max(1);
        text.split('\n')
            .flat_map(|line| Self::wrap_line(line, max_width))
            .collect()
    }

    fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }

            if word_width > max_width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > max_width {
                        lines.push(std::mem::take(&mut current_line));
                        current_width = 0;
                    }
                    current_line.push(ch);
                    current_width += ch_width;
                }
            } else {
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() || lines.is_empty() {
            lines.push(current_line);
        }
        lines
    }

    /// Cuts `text` to `max_width` columns, ending in an ellipsis when cut.
    pub fn truncate(text: &str, max_width: usize) -> String {
        if text.width() <= max_width {
            return text.to_string();
        }
        if max_width == 0 {
            return String::new();
        }
        let mut out = String::new();
        let mut width = 0;
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if width + ch_width + 1 > max_width {
                break;
            }
            out.push(ch);
            width += ch_width;
        }
        out.push(ELLIPSIS);
        out
    }

    /// The first `max_width` columns of `text`, cut without a marker.
    pub fn clip(text: &str, max_width: usize) -> &str {
        let mut width = 0;
        for (i, ch) in text.char_indices() {
            let ch_width = ch.width().unwrap_or(0);
            if width + ch_width > max_width {
                return &text[..i];
            }
            width += ch_width;
        }
        text
    }

    /// The last `max_width` columns of `text`.
    pub fn tail(text: &str, max_width: usize) -> &str {
        let mut width = 0;
        let mut start = text.len();
        for (i, ch) in text.char_indices().rev() {
            let ch_width = ch.width().unwrap_or(0);
            if width + ch_width > max_width {
                break;
            }
            width += ch_width;
            start = i;
        }
        &text[start..]
    }
}
