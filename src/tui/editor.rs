// Multi-line edit buffer for the prompt panel
//
// A Vec<String> of lines with a (row, col) cursor measured in characters.
// Deliberately small: no selections, no undo, no soft wrap. The panel that
// owns the buffer decides which keys reach it.

use unicode_width::UnicodeWidthStr;

/// Editable text buffer with a character cursor
#[derive(Debug, Clone)]
pub struct EditBuffer {
    /// Lines without trailing newlines; always at least one line
    lines: Vec<String>,
    /// Cursor row (line index)
    row: usize,
    /// Cursor column in characters, clamped to the current line length
    col: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Full text with lines joined by '\n'
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Total character count, counting each line break as one character.
    /// This is the number shown by the live counter.
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    /// True if the buffer contains only whitespace
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Display width of the line up to the cursor, for terminal cursor
    /// placement (wide glyphs occupy two cells).
    pub fn cursor_display_col(&self) -> u16 {
        let line = &self.lines[self.row];
        let prefix: String = line.chars().take(self.col).collect();
        prefix.width() as u16
    }

    /// Byte offset of the cursor within its line
    fn byte_col(&self) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_col();
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        let at = self.byte_col();
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor; at column 0, join with the
    /// previous line.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].chars().count();
            self.lines[self.row].push_str(&current);
        }
    }

    /// Delete the character under the cursor; at end of line, join with the
    /// next line.
    pub fn delete(&mut self) {
        let line_chars = self.lines[self.row].chars().count();
        if self.col < line_chars {
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].chars().count();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.lines[self.row].chars().count() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.lines[self.row].chars().count());
        } else {
            self.col = 0;
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.lines[self.row].chars().count());
        } else {
            self.col = self.lines[self.row].chars().count();
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.lines[self.row].chars().count();
    }
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str) -> EditBuffer {
        let mut buf = EditBuffer::new();
        for c in text.chars() {
            if c == '\n' {
                buf.insert_newline();
            } else {
                buf.insert_char(c);
            }
        }
        buf
    }

    #[test]
    fn typing_builds_text() {
        let mut buf = EditBuffer::new();
        for c in "hello".chars() {
            buf.insert_char(c);
        }
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), (0, 5));
    }

    #[test]
    fn char_count_includes_line_breaks() {
        // "ab\ncd" = 4 chars + 1 newline
        assert_eq!(buffer_with("ab\ncd").char_count(), 5);
        assert_eq!(buffer_with("").char_count(), 0);
    }

    #[test]
    fn char_count_is_chars_not_bytes() {
        let buf = buffer_with("héllo 日本");
        assert_eq!(buf.char_count(), 8);
    }

    #[test]
    fn newline_splits_at_cursor() {
        let mut buf = buffer_with("hello");
        buf.move_home();
        buf.move_right();
        buf.move_right();
        buf.insert_newline();
        assert_eq!(buf.text(), "he\nllo");
        assert_eq!(buf.cursor(), (1, 0));
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let mut buf = buffer_with("ab\ncd");
        buf.row = 1;
        buf.col = 0;
        buf.backspace();
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), (0, 2));
    }

    #[test]
    fn delete_at_line_end_joins_lines() {
        let mut buf = buffer_with("ab\ncd");
        buf.row = 0;
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut buf = buffer_with("日本語");
        buf.backspace();
        assert_eq!(buf.text(), "日本");
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.text(), "");
        // Nothing left; must not panic
        buf.backspace();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let mut buf = buffer_with("long line\nab");
        buf.row = 0;
        buf.move_end();
        buf.move_down();
        assert_eq!(buf.cursor(), (1, 2));
    }

    #[test]
    fn is_blank_ignores_whitespace() {
        assert!(buffer_with("").is_blank());
        assert!(buffer_with("   \n\t ").is_blank());
        assert!(!buffer_with(" x ").is_blank());
    }

    #[test]
    fn cursor_display_col_counts_wide_glyphs() {
        let mut buf = buffer_with("日本");
        buf.move_end();
        // Two CJK characters occupy four cells
        assert_eq!(buf.cursor_display_col(), 4);
    }

    #[test]
    fn typing_leaves_cursor_at_end() {
        let buf = buffer_with("ab\ncd");
        assert_eq!(buf.cursor(), (1, 2));
    }
}
