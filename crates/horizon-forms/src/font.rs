//! Font metrics used for dialog layout.
//!
//! Dialogs never rasterize text themselves; they only need measurements to
//! position their children. [`FontMetrics`] is the seam to whatever font system
//! the host application renders with.

use std::sync::Arc;

/// Measurements a dialog needs from a font.
pub trait FontMetrics: Send + Sync {
    /// Height of one line of text including leading.
    fn line_height(&self) -> f32;

    /// Height of the glyph cell without leading.
    fn font_height(&self) -> f32;

    /// Width of the widest character in the font.
    fn max_char_width(&self) -> f32;

    /// Advance width of a single character.
    fn char_width(&self, ch: char) -> f32;

    /// Rendered width of a string.
    fn string_width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for Arc<F> {
    fn line_height(&self) -> f32 {
        (**self).line_height()
    }

    fn font_height(&self) -> f32 {
        (**self).font_height()
    }

    fn max_char_width(&self) -> f32 {
        (**self).max_char_width()
    }

    fn char_width(&self, ch: char) -> f32 {
        (**self).char_width(ch)
    }

    fn string_width(&self, text: &str) -> f32 {
        (**self).string_width(text)
    }
}

/// A fixed-cell font where every character has the same advance.
///
/// This matches the bitmap fonts emulator front-ends typically ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFont {
    char_width: f32,
    font_height: f32,
    line_height: f32,
}

impl MonospaceFont {
    /// Create a font with the given cell width, glyph height and line height.
    pub const fn new(char_width: f32, font_height: f32, line_height: f32) -> Self {
        Self {
            char_width,
            font_height,
            line_height,
        }
    }
}

impl Default for MonospaceFont {
    /// The 6x8 "small" font with a 10 pixel line.
    fn default() -> Self {
        Self::new(6.0, 8.0, 10.0)
    }
}

impl FontMetrics for MonospaceFont {
    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn font_height(&self) -> f32 {
        self.font_height
    }

    fn max_char_width(&self) -> f32 {
        self.char_width
    }

    fn char_width(&self, _ch: char) -> f32 {
        self.char_width
    }

    fn string_width(&self, text: &str) -> f32 {
        self.char_width * text.chars().count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_string_width() {
        let font = MonospaceFont::new(8.0, 16.0, 18.0);
        assert_eq!(font.string_width(""), 0.0);
        assert_eq!(font.string_width("Name"), 32.0);
        assert_eq!(font.string_width("héllo"), 40.0);
    }

    #[test]
    fn test_arc_forwards_metrics() {
        let font: Arc<dyn FontMetrics> = Arc::new(MonospaceFont::default());
        assert_eq!(font.line_height(), 10.0);
        assert_eq!(font.font_height(), 8.0);
        assert_eq!(font.max_char_width(), 6.0);
        assert_eq!(font.string_width("abc"), 18.0);
    }
}
