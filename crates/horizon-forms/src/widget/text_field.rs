//! Single-line text entry field.
//!
//! [`TextField`] owns the user's text and a cursor. Keystrokes are applied with
//! [`TextField::handle_key`], which reports the [`Command`] the owning dialog
//! should dispatch (if any). An optional [`TextFilter`] restricts which
//! characters can be entered.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_forms::{Command, FieldKey, MonospaceFont, TextField, text_filter};
//! use horizon_forms_core::Rect;
//!
//! let mut field = TextField::new(Arc::new(MonospaceFont::default()), Rect::ZERO);
//! field.set_filter(Some(text_filter(|c| c.is_ascii_hexdigit())));
//!
//! assert_eq!(field.handle_key(FieldKey::Char('f')), Some(Command::FieldChanged));
//! assert_eq!(field.handle_key(FieldKey::Char('z')), None);
//! assert_eq!(field.text(), "f");
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_forms_core::Rect;
use horizon_forms_core::logging::targets;

use crate::command::Command;
use crate::font::FontMetrics;

/// Predicate deciding whether a character may be entered into a field.
pub type TextFilter = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Wrap a closure as a [`TextFilter`].
pub fn text_filter<F>(f: F) -> TextFilter
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Keys a text field understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// A printable character.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
    /// Commit the edit.
    Enter,
    /// Abandon the edit.
    Escape,
}

/// An editable single-line text box.
pub struct TextField {
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    filter: Option<TextFilter>,
    font: Arc<dyn FontMetrics>,
    geometry: Rect,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("has_filter", &self.filter.is_some())
            .field("geometry", &self.geometry)
            .finish()
    }
}

impl TextField {
    /// Create an empty field.
    pub fn new(font: Arc<dyn FontMetrics>, geometry: Rect) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            filter: None,
            font,
            geometry,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, dropping characters the filter rejects.
    ///
    /// The cursor moves to the end of the new text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().filter(|&c| self.accepts(c)).collect();
        self.cursor = self.char_count();
    }

    /// Install or remove the character filter.
    ///
    /// Existing text is left as is; the filter applies to later input.
    pub fn set_filter(&mut self, filter: Option<TextFilter>) {
        self.filter = filter;
    }

    /// Check whether a filter is installed.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Position and size within the dialog.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// The font text is entered in.
    pub fn font(&self) -> &Arc<dyn FontMetrics> {
        &self.font
    }

    /// Apply a keystroke.
    ///
    /// Returns the command the owning dialog should handle, if any.
    pub fn handle_key(&mut self, key: FieldKey) -> Option<Command> {
        match key {
            FieldKey::Char(c) => {
                if c.is_control() || !self.accepts(c) {
                    return None;
                }
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                tracing::trace!(target: targets::FIELD, text = %self.text, "character inserted");
                Some(Command::FieldChanged)
            }
            FieldKey::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                self.remove_at_cursor();
                Some(Command::FieldChanged)
            }
            FieldKey::Delete => {
                if self.cursor >= self.char_count() {
                    return None;
                }
                self.remove_at_cursor();
                Some(Command::FieldChanged)
            }
            FieldKey::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            FieldKey::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                None
            }
            FieldKey::Home => {
                self.cursor = 0;
                None
            }
            FieldKey::End => {
                self.cursor = self.char_count();
                None
            }
            FieldKey::Enter => Some(Command::FieldAccept),
            FieldKey::Escape => Some(Command::FieldCancel),
        }
    }

    fn accepts(&self, c: char) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(c))
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn remove_at_cursor(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MonospaceFont;

    fn field() -> TextField {
        TextField::new(Arc::new(MonospaceFont::default()), Rect::ZERO)
    }

    #[test]
    fn test_typing_reports_changes() {
        let mut field = field();
        assert_eq!(field.handle_key(FieldKey::Char('h')), Some(Command::FieldChanged));
        assert_eq!(field.handle_key(FieldKey::Char('i')), Some(Command::FieldChanged));
        assert_eq!(field.text(), "hi");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = field();
        field.set_text("ac");
        field.handle_key(FieldKey::Left);
        field.handle_key(FieldKey::Char('b'));
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = field();
        field.set_text("héllo");
        assert_eq!(field.handle_key(FieldKey::Backspace), Some(Command::FieldChanged));
        assert_eq!(field.text(), "héll");

        field.handle_key(FieldKey::Home);
        assert_eq!(field.handle_key(FieldKey::Backspace), None);
        field.handle_key(FieldKey::Right);
        assert_eq!(field.handle_key(FieldKey::Delete), Some(Command::FieldChanged));
        assert_eq!(field.text(), "hll");

        field.handle_key(FieldKey::End);
        assert_eq!(field.handle_key(FieldKey::Delete), None);
    }

    #[test]
    fn test_enter_and_escape() {
        let mut field = field();
        assert_eq!(field.handle_key(FieldKey::Enter), Some(Command::FieldAccept));
        assert_eq!(field.handle_key(FieldKey::Escape), Some(Command::FieldCancel));
    }

    #[test]
    fn test_filter_rejects_keystrokes() {
        let mut field = field();
        field.set_filter(Some(text_filter(|c| c.is_ascii_digit())));
        assert_eq!(field.handle_key(FieldKey::Char('x')), None);
        assert_eq!(field.handle_key(FieldKey::Char('7')), Some(Command::FieldChanged));
        assert_eq!(field.text(), "7");
    }

    #[test]
    fn test_set_text_applies_filter() {
        let mut field = field();
        field.set_filter(Some(text_filter(|c| c.is_ascii_digit())));
        field.set_text("a1b2");
        assert_eq!(field.text(), "12");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut field = field();
        assert_eq!(field.handle_key(FieldKey::Char('\u{7}')), None);
        assert_eq!(field.text(), "");
    }
}
