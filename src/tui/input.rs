/// The in-progress new-todo text, edited one keystroke at a time.
/// `cursor` is a byte offset kept on a char boundary.
#[derive(Debug, Default)]
pub struct EntryState {
    pub active: bool,
    pub text: String,
    pub cursor: usize,
}

impl EntryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.cursor = self.text.len();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    // Byte offset of the char preceding the cursor, if any.
    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(text: &str) -> EntryState {
        let mut entry = EntryState::new();
        entry.text = text.to_string();
        entry.activate();
        entry
    }

    #[test]
    fn test_entry_state_new() {
        let entry = EntryState::new();
        assert!(!entry.active);
        assert!(entry.text.is_empty());
        assert_eq!(entry.cursor, 0);
    }

    #[test]
    fn test_insert_char() {
        let mut entry = entry_with("Hello");
        entry.insert_char('!');

        assert_eq!(entry.text, "Hello!");
        assert_eq!(entry.cursor, 6);
    }

    #[test]
    fn test_insert_char_mid_text() {
        let mut entry = entry_with("Hllo");
        entry.cursor = 1;
        entry.insert_char('e');

        assert_eq!(entry.text, "Hello");
        assert_eq!(entry.cursor, 2);
    }

    #[test]
    fn test_backspace() {
        let mut entry = entry_with("Hello");
        entry.backspace();

        assert_eq!(entry.text, "Hell");
        assert_eq!(entry.cursor, 4);

        // At the start of the buffer it does nothing
        entry.cursor = 0;
        entry.backspace();
        assert_eq!(entry.text, "Hell");
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut entry = entry_with("héllo");
        entry.cursor = 3; // Just past the é
        entry.backspace();

        assert_eq!(entry.text, "hllo");
        assert_eq!(entry.cursor, 1);
    }

    #[test]
    fn test_delete() {
        let mut entry = entry_with("Hello");
        entry.cursor = 0;
        entry.delete();

        assert_eq!(entry.text, "ello");
        assert_eq!(entry.cursor, 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut entry = entry_with("Hello");

        entry.move_cursor_left();
        assert_eq!(entry.cursor, 4);

        entry.move_cursor_right();
        assert_eq!(entry.cursor, 5);

        // Clamped at the end
        entry.move_cursor_right();
        assert_eq!(entry.cursor, 5);

        entry.move_cursor_home();
        assert_eq!(entry.cursor, 0);

        entry.move_cursor_end();
        assert_eq!(entry.cursor, 5);
    }

    #[test]
    fn test_clear() {
        let mut entry = entry_with("buy milk");
        entry.clear();

        assert!(entry.text.is_empty());
        assert_eq!(entry.cursor, 0);
        // Clearing the text does not leave entry mode
        assert!(entry.active);
    }
}
