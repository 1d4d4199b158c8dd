//! Static geometry of a labeled form dialog.
//!
//! The layout is computed once from the label font's metrics and the label
//! list; dialogs do not relayout afterwards. All spacing is derived from the
//! font, truncated to whole pixels:
//!
//! | Quantity        | Value                     |
//! |-----------------|---------------------------|
//! | horizontal border | `max_char_width * 1.25` |
//! | vertical border   | `font_height / 2`       |
//! | vertical gap      | `font_height / 4`       |
//! | button height     | `line_height * 1.25`    |
//!
//! The dialog is a fixed number of character columns wide regardless of the
//! label text. Rows are stacked top to bottom below the title bar, followed by
//! the message line and the button row.

use horizon_forms_core::logging::targets;
use horizon_forms_core::{Rect, Size};

use crate::config::FormDialogConfig;
use crate::font::FontMetrics;

/// Geometry of one label + field row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// The static label, left-aligned at the border.
    pub label: Rect,
    /// The text field, from the label column to the right border.
    pub field: Rect,
}

/// The complete geometry of a form dialog, in dialog-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    /// Overall dialog size, title bar included.
    pub size: Size,
    /// Width of the label column.
    pub label_width: f32,
    /// One entry per label, in input order.
    pub rows: Vec<RowLayout>,
    /// The error message line.
    pub message: Rect,
    /// The OK button.
    pub ok_button: Rect,
    /// The Cancel button.
    pub cancel_button: Rect,
}

/// Spacing constants derived from a font.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    line_height: f32,
    font_height: f32,
    font_width: f32,
    button_height: f32,
    hborder: f32,
    vborder: f32,
    vgap: f32,
}

impl Metrics {
    fn from_font(font: &dyn FontMetrics) -> Self {
        let line_height = font.line_height();
        let font_height = font.font_height();
        let font_width = font.max_char_width();
        Self {
            line_height,
            font_height,
            font_width,
            button_height: (line_height * 1.25).floor(),
            hborder: (font_width * 1.25).floor(),
            vborder: (font_height / 2.0).floor(),
            vgap: (font_height / 4.0).floor(),
        }
    }
}

/// Width of the label column: the rendered width of the label with the most
/// characters. Among labels of equal length, the first one wins.
pub fn label_column_width<S: AsRef<str>>(font: &dyn FontMetrics, labels: &[S]) -> f32 {
    let mut longest: Option<(usize, &str)> = None;
    for label in labels {
        let label = label.as_ref();
        let len = label.chars().count();
        if longest.is_none_or(|(best, _)| len > best) {
            longest = Some((len, label));
        }
    }
    longest.map_or(0.0, |(_, label)| font.string_width(label))
}

/// Height of the title bar for a given title.
pub fn title_bar_height(font: &dyn FontMetrics, title: &str, config: &FormDialogConfig) -> f32 {
    if title.is_empty() {
        0.0
    } else {
        font.font_height() + config.title_padding * 2.0
    }
}

impl FormLayout {
    /// Compute the layout for `labels` measured with `font`.
    pub fn compute<S: AsRef<str>>(
        font: &dyn FontMetrics,
        labels: &[S],
        title_height: f32,
        config: &FormDialogConfig,
    ) -> Self {
        let m = Metrics::from_font(font);
        let row_count = labels.len() as f32;

        let width = m.hborder * 2.0 + m.font_width * config.field_columns as f32;
        let height = m.button_height
            + m.line_height
            + m.vgap
            + row_count * (m.line_height + m.vgap)
            + title_height
            + m.vborder * 2.0;

        let label_width = label_column_width(font, labels);

        let mut ypos = m.vborder + title_height;
        let field_x = m.hborder + label_width + m.font_width;
        // A label column wider than the dialog leaves no room for the field.
        let field_width = (width - field_x - m.hborder).max(0.0);
        let rows = labels
            .iter()
            .map(|_| {
                let row = RowLayout {
                    label: Rect::new(m.hborder, ypos + 2.0, label_width, m.font_height),
                    field: Rect::new(field_x, ypos, field_width, m.line_height),
                };
                ypos += m.line_height + m.vgap;
                row
            })
            .collect();

        ypos += m.vgap;
        let message = Rect::new(m.hborder, ypos, width - 2.0 * m.hborder, m.font_height);

        let button_width = font
            .string_width(&config.ok_label)
            .max(font.string_width(&config.cancel_label))
            + config.button_padding;
        let button_y = height - m.button_height - m.vborder;
        let cancel_x = width - m.hborder - button_width;
        let ok_x = cancel_x - m.font_width - button_width;

        tracing::trace!(
            target: targets::LAYOUT,
            width,
            height,
            label_width,
            rows = labels.len(),
            "computed form layout"
        );

        Self {
            size: Size::new(width, height),
            label_width,
            rows,
            message,
            ok_button: Rect::new(ok_x, button_y, button_width, m.button_height),
            cancel_button: Rect::new(cancel_x, button_y, button_width, m.button_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MonospaceFont;

    /// 'W' is twice as wide as everything else.
    struct Proportional;

    impl FontMetrics for Proportional {
        fn line_height(&self) -> f32 {
            10.0
        }
        fn font_height(&self) -> f32 {
            8.0
        }
        fn max_char_width(&self) -> f32 {
            10.0
        }
        fn char_width(&self, ch: char) -> f32 {
            if ch == 'W' { 10.0 } else { 5.0 }
        }
    }

    fn config() -> FormDialogConfig {
        FormDialogConfig::default()
    }

    #[test]
    fn test_two_row_layout() {
        let font = MonospaceFont::default();
        let title = title_bar_height(&font, "Enter Info", &config());
        assert_eq!(title, 16.0);

        let layout = FormLayout::compute(&font, &["Name", "Email"], title, &config());

        assert_eq!(layout.size, Size::new(248.0, 72.0));
        assert_eq!(layout.label_width, 30.0);
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.rows[0].label, Rect::new(7.0, 22.0, 30.0, 8.0));
        assert_eq!(layout.rows[0].field, Rect::new(43.0, 20.0, 198.0, 10.0));
        assert_eq!(layout.rows[1].field, Rect::new(43.0, 32.0, 198.0, 10.0));
        assert_eq!(layout.message, Rect::new(7.0, 46.0, 234.0, 8.0));
        assert_eq!(layout.ok_button, Rect::new(123.0, 56.0, 56.0, 12.0));
        assert_eq!(layout.cancel_button, Rect::new(185.0, 56.0, 56.0, 12.0));
    }

    #[test]
    fn test_width_ignores_label_text() {
        let font = MonospaceFont::default();
        let short = FormLayout::compute(&font, &["A"], 0.0, &config());
        let long = FormLayout::compute(&font, &["A much longer label"], 0.0, &config());
        assert_eq!(short.size.width, long.size.width);
    }

    #[test]
    fn test_empty_label_list_reserves_message_and_buttons() {
        let font = MonospaceFont::default();
        let labels: [&str; 0] = [];
        let layout = FormLayout::compute(&font, &labels, 0.0, &config());

        assert!(layout.rows.is_empty());
        assert_eq!(layout.label_width, 0.0);
        // button row + message line + gap + borders
        assert_eq!(layout.size.height, 12.0 + 10.0 + 2.0 + 8.0);
        assert!(layout.message.bottom() <= layout.ok_button.top());
    }

    #[test]
    fn test_empty_labels_put_fields_after_margin() {
        let font = MonospaceFont::default();
        let layout = FormLayout::compute(&font, &["", ""], 0.0, &config());
        assert_eq!(layout.label_width, 0.0);
        // border + one character gap
        assert_eq!(layout.rows[0].field.left(), 7.0 + 6.0);
    }

    #[test]
    fn test_label_width_first_of_ties_wins() {
        assert_eq!(label_column_width(&Proportional, &["ab", "WW", "x"]), 10.0);
        assert_eq!(label_column_width(&Proportional, &["WW", "ab"]), 20.0);
        assert_eq!(label_column_width(&Proportional, &["a", "WWW"]), 30.0);
    }

    #[test]
    fn test_label_width_counts_characters_not_bytes() {
        // "éé" is four bytes but two characters, so "abc" is longer.
        assert_eq!(label_column_width(&Proportional, &["éé", "abc"]), 15.0);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let font = MonospaceFont::default();
        let layout = FormLayout::compute(&font, &["a", "b", "c"], 0.0, &config());
        for pair in layout.rows.windows(2) {
            assert!(pair[0].field.top() < pair[1].field.top());
        }
    }

    #[test]
    fn test_overlong_label_collapses_field() {
        let font = MonospaceFont::default();
        let long = "x".repeat(40);
        let layout = FormLayout::compute(&font, &[long.as_str(), "Name"], 0.0, &config());

        assert_eq!(layout.size.width, 248.0);
        assert_eq!(layout.label_width, 240.0);
        for row in &layout.rows {
            assert_eq!(row.field.left(), 253.0);
            assert_eq!(row.field.width(), 0.0);
        }
    }

    #[test]
    fn test_untitled_dialog_has_no_title_bar() {
        assert_eq!(title_bar_height(&MonospaceFont::default(), "", &config()), 0.0);
    }
}
