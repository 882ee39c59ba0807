//! Text buffer with a character cursor
//!
//! The cursor is a char index (not a byte offset) so every edit stays on a
//! UTF-8 boundary.

/// Editable text content of the field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end of `text`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole content, cursor goes to the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a typed character at the cursor
    ///
    /// Rejected (returns false) when the buffer already holds `limit` chars.
    pub fn insert_char(&mut self, c: char, limit: Option<usize>) -> bool {
        if let Some(limit) = limit {
            if self.len() >= limit {
                return false;
            }
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Insert a string at the cursor with no length limit
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Keep only the first `max_chars` characters
    ///
    /// Returns true if anything was discarded.
    pub fn truncate_chars(&mut self, max_chars: usize) -> bool {
        if self.len() <= max_chars {
            return false;
        }
        let at = self.byte_index(max_chars);
        self.text.truncate(at);
        self.cursor = self.cursor.min(max_chars);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        let before: Vec<char> = self.text.chars().take(self.cursor).collect();
        let line_start = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.cursor = line_start;
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        let to_newline = self
            .text
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n');
        self.cursor = match to_newline {
            Some(offset) => self.cursor + offset,
            None => self.len(),
        };
    }

    /// Line and column (both in chars) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}
