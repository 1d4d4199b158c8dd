//! OK/Cancel button row.

use std::ops::{BitOr, BitOrAssign};

use horizon_forms_core::Rect;

use crate::command::Command;

/// Standard buttons a [`ButtonGroup`] can hold.
///
/// These flags can be combined using bitwise OR operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardButton(u32);

impl StandardButton {
    /// No buttons.
    pub const NONE: StandardButton = StandardButton(0);

    /// An "OK" button.
    pub const OK: StandardButton = StandardButton(1 << 0);

    /// A "Cancel" button.
    pub const CANCEL: StandardButton = StandardButton(1 << 1);

    /// Check if this set contains the given button.
    pub fn has(&self, button: StandardButton) -> bool {
        (self.0 & button.0) == button.0 && button.0 != 0
    }

    /// The command a click on this button produces.
    fn command(self) -> Option<Command> {
        match self {
            StandardButton::OK => Some(Command::Ok),
            StandardButton::CANCEL => Some(Command::Close),
            _ => None,
        }
    }
}

impl BitOr for StandardButton {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        StandardButton(self.0 | rhs.0)
    }
}

impl BitOrAssign for StandardButton {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A single push button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    kind: StandardButton,
    caption: String,
    geometry: Rect,
}

impl Button {
    /// Which standard button this is.
    pub fn kind(&self) -> StandardButton {
        self.kind
    }

    /// The button caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Position and size within the dialog.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }
}

/// The OK and Cancel buttons at the bottom of a dialog.
///
/// OK sits to the left of Cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup {
    ok: Button,
    cancel: Button,
}

impl ButtonGroup {
    /// Create the group from precomputed button rectangles.
    pub fn new(
        ok_caption: impl Into<String>,
        ok_geometry: Rect,
        cancel_caption: impl Into<String>,
        cancel_geometry: Rect,
    ) -> Self {
        Self {
            ok: Button {
                kind: StandardButton::OK,
                caption: ok_caption.into(),
                geometry: ok_geometry,
            },
            cancel: Button {
                kind: StandardButton::CANCEL,
                caption: cancel_caption.into(),
                geometry: cancel_geometry,
            },
        }
    }

    /// The buttons in focus order.
    pub fn buttons(&self) -> [&Button; 2] {
        [&self.ok, &self.cancel]
    }

    /// The set of buttons in this group.
    pub fn standard_buttons(&self) -> StandardButton {
        self.ok.kind | self.cancel.kind
    }

    /// Translate a click into the command the dialog should handle.
    ///
    /// Returns `None` for buttons this group does not hold.
    pub fn click(&self, button: StandardButton) -> Option<Command> {
        if self.standard_buttons().has(button) {
            button.command()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> ButtonGroup {
        ButtonGroup::new(
            "OK",
            Rect::new(10.0, 100.0, 56.0, 12.0),
            "Cancel",
            Rect::new(72.0, 100.0, 56.0, 12.0),
        )
    }

    #[test]
    fn test_click_mapping() {
        let group = group();
        assert_eq!(group.click(StandardButton::OK), Some(Command::Ok));
        assert_eq!(group.click(StandardButton::CANCEL), Some(Command::Close));
        assert_eq!(group.click(StandardButton::NONE), None);
        assert_eq!(group.click(StandardButton::OK | StandardButton::CANCEL), None);
    }

    #[test]
    fn test_focus_order() {
        let group = group();
        let [first, second] = group.buttons();
        assert_eq!(first.caption(), "OK");
        assert_eq!(second.caption(), "Cancel");
        assert!(group.standard_buttons().has(StandardButton::CANCEL));
    }
}
