//! Single-line URL input.

use unicode_width::UnicodeWidthStr;

/// Editable single-line text with a cursor measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_offset(self.cursor)].width()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        // Newlines never belong in a URL; pasted ones are dropped.
        if c == '\n' || c == '\r' {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_cursor() {
        let mut input = InputField::new();
        input.insert_str("https://exmple.com");
        assert_eq!(input.cursor(), 18);

        // Fix the typo in the middle
        for _ in 0..8 {
            input.move_left();
        }
        assert_eq!(input.cursor(), 10);
        input.insert_char('a');
        assert_eq!(input.text(), "https://example.com");
        assert_eq!(input.cursor(), 11);
    }

    #[test]
    fn test_backspace_and_delete_at_edges() {
        let mut input = InputField::new();
        input.backspace();
        input.delete();
        assert!(input.is_empty());

        input.set_text("abc");
        input.delete();
        assert_eq!(input.text(), "abc");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "abc");
        input.delete();
        assert_eq!(input.text(), "bc");
        input.move_end();
        input.backspace();
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = InputField::new();
        input.insert_str("https://example.com/\r\n");
        assert_eq!(input.text(), "https://example.com/");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = InputField::new();
        input.insert_str("https://例え.jp");
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "https://例.jp");
        assert_eq!(input.cursor_column(), "https://例".width());
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputField::new();
        input.set_text("https://example.com");
        input.clear();
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
    }
}
