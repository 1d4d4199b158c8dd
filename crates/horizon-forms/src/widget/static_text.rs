//! Non-editable single-line text.

use horizon_forms_core::Rect;

/// How a piece of static text should be colored by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRole {
    /// Regular label text.
    #[default]
    Normal,
    /// Highlighted text, used for error messages.
    Emphasis,
}

/// A left-aligned, non-editable line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticText {
    text: String,
    geometry: Rect,
    role: TextRole,
}

impl StaticText {
    /// Create a label at the given geometry.
    pub fn new(text: impl Into<String>, geometry: Rect) -> Self {
        Self {
            text: text.into(),
            geometry,
            role: TextRole::Normal,
        }
    }

    /// Set the text role using builder pattern.
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Position and size within the dialog.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// The text role.
    pub fn role(&self) -> TextRole {
        self.role
    }
}
