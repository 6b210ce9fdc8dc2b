use unicode_segmentation::UnicodeSegmentation;

/// Single-line editable text with a byte-offset cursor on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in grapheme clusters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].graphemes(true).count()
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.next_boundary();
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .grapheme_indices(true)
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor() {
        let mut input = TextInput::default();
        for c in "Stndup".chars() {
            input.insert(c);
        }
        input.home();
        input.right();
        input.right();
        input.insert('a');
        assert_eq!(input.value(), "Standup");
        assert_eq!(input.cursor_column(), 3);

        input.end();
        input.backspace();
        input.home();
        input.delete();
        assert_eq!(input.value(), "tandu");
    }

    #[test]
    fn multibyte_graphemes() {
        let mut input = TextInput::with_value("café");
        input.backspace();
        assert_eq!(input.value(), "caf");

        let mut input = TextInput::with_value("né");
        input.left();
        assert_eq!(input.cursor_column(), 1);
        input.delete();
        assert_eq!(input.value(), "n");
    }
}
