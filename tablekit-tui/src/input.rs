//! Single-line text editing for the search box.

use crate::keys::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Search box contents and cursor.
///
/// The cursor is a character index, not a byte index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..char_to_byte_index(&self.text, self.cursor)]
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EditResult {
        match key {
            Key::Char('u') if modifiers.ctrl => {
                if self.text.is_empty() {
                    EditResult::Handled
                } else {
                    self.text.clear();
                    self.cursor = 0;
                    EditResult::Changed
                }
            }

            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && !c.is_control() => {
                self.insert_char(c);
                EditResult::Changed
            }

            Key::Backspace => {
                if self.delete_back() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }

            Key::Delete => {
                if self.delete_forward() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }

            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditResult::Handled
            }

            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                EditResult::Handled
            }

            Key::Home => {
                self.cursor = 0;
                EditResult::Handled
            }

            Key::End => {
                self.cursor = self.char_count();
                EditResult::Handled
            }

            _ => EditResult::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
