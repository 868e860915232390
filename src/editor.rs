//! Multi-line text buffer backing the item editor.
//!
//! The cursor is a byte offset that always sits on a char boundary.
//! Home/End and the kill commands work on the current line, not the
//! whole buffer.

#[derive(Debug, Clone, Default)]
pub struct Editor {
    text: String,
    cursor: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor holding `text` with the cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = normalize_newlines(text);
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn input_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor
    pub fn input_str(&mut self, s: &str) {
        let s = normalize_newlines(s);
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn input_newline(&mut self) {
        self.input_char('\n');
    }

    /// Delete character before cursor
    pub fn input_backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete character at cursor
    pub fn input_delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn input_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn input_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Move cursor to start of the current line
    pub fn input_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// Move cursor to end of the current line
    pub fn input_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move up one line, keeping the column where possible
    pub fn input_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, col);
    }

    /// Move down one line, keeping the column where possible
    pub fn input_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let start = self.line_start(self.cursor);
        let col = self.text[start..self.cursor].chars().count();
        self.cursor = self.offset_in_line(end + 1, col);
    }

    /// Move cursor to the start of the previous word
    pub fn input_word_left(&mut self) {
        let before: Vec<(usize, char)> = self.text[..self.cursor].char_indices().collect();
        let mut i = before.len();

        while i > 0 && before[i - 1].1.is_whitespace() {
            i -= 1;
        }
        while i > 0 && !before[i - 1].1.is_whitespace() {
            i -= 1;
        }

        self.cursor = before.get(i).map(|(pos, _)| *pos).unwrap_or(self.cursor);
        if i == 0 {
            self.cursor = 0;
        }
    }

    /// Move cursor to the end of the next word
    pub fn input_word_right(&mut self) {
        self.cursor = self.word_end_from(self.cursor);
    }

    /// Delete the word before cursor
    pub fn input_delete_word_back(&mut self) {
        let end = self.cursor;
        self.input_word_left();
        self.text.drain(self.cursor..end);
    }

    /// Delete the word after cursor
    pub fn input_delete_word_forward(&mut self) {
        let end = self.word_end_from(self.cursor);
        self.text.drain(self.cursor..end);
    }

    /// Delete from cursor to end of line
    pub fn input_kill_line(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.cursor && end < self.text.len() {
            // At end of line: join with the next one
            self.text.remove(end);
        } else {
            self.text.drain(self.cursor..end);
        }
    }

    /// Delete from cursor to start of line
    pub fn input_kill_to_start(&mut self) {
        let start = self.line_start(self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let start = self.line_start(self.cursor);
        (line, self.text[start..self.cursor].chars().count())
    }

    /// Number of lines in the buffer (an empty buffer has one).
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(pos, _)| pos)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    /// Byte offset of char column `col` in the line starting at `start`,
    /// clamped to the end of that line.
    fn offset_in_line(&self, start: usize, col: usize) -> usize {
        let end = self.line_end(start);
        self.text[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn word_end_from(&self, pos: usize) -> usize {
        let mut chars = self.text[pos..].char_indices().peekable();
        let mut end = pos;

        while let Some((i, c)) = chars.peek().copied() {
            if !c.is_whitespace() {
                break;
            }
            end = pos + i + c.len_utf8();
            chars.next();
        }
        while let Some((i, c)) = chars.peek().copied() {
            if c.is_whitespace() {
                break;
            }
            end = pos + i + c.len_utf8();
            chars.next();
        }

        end
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
