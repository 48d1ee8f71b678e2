//! Settings dialog - single-line editor for the backend URL

/// Open settings overlay holding the edited URL
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsDialog {
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl SettingsDialog {
    /// Dialog pre-filled with `current`, cursor at the end
    pub fn new(current: &str) -> Self {
        SettingsDialog {
            input: current.to_string(),
            cursor: current.chars().count(),
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.input.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let idx = self.byte_index(self.cursor - 1);
            self.input.remove(idx);
            self.cursor -= 1;
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    /// Drop the whole field, e.g. before pasting a new URL
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_with_cursor_at_end() {
        let dialog = SettingsDialog::new("http://localhost:8000");
        assert_eq!(dialog.input, "http://localhost:8000");
        assert_eq!(dialog.cursor, 21);
    }

    #[test]
    fn test_edit_in_middle() {
        let mut dialog = SettingsDialog::new("http://pi:8000");
        dialog.home();
        for _ in 0..9 {
            dialog.right();
        }
        dialog.backspace();
        dialog.backspace();
        for c in "raspberrypi.local".chars() {
            dialog.insert(c);
        }
        assert_eq!(dialog.input, "http://raspberrypi.local:8000");
    }

    #[test]
    fn test_cursor_bounds_and_multibyte() {
        let mut dialog = SettingsDialog::new("");
        dialog.backspace();
        dialog.left();
        assert_eq!(dialog.cursor, 0);

        dialog.insert('é');
        dialog.insert('x');
        dialog.left();
        dialog.backspace();
        assert_eq!(dialog.input, "x");
        dialog.right();
        dialog.right();
        assert_eq!(dialog.cursor, 1);
    }
}
