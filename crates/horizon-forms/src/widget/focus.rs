//! Focus ordering within a dialog.

use super::button_group::StandardButton;

/// Something that can hold keyboard focus inside a form dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The text field at the given index.
    Field(usize),
    /// A button of the dialog's button group.
    Button(StandardButton),
}

/// The dialog's focus chain: every field in row order, then the buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusList {
    targets: Vec<FocusTarget>,
    current: Option<usize>,
}

impl FocusList {
    /// Create an empty focus list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append targets to the end of the chain.
    ///
    /// The first target ever added receives focus.
    pub fn extend(&mut self, targets: impl IntoIterator<Item = FocusTarget>) {
        self.targets.extend(targets);
        if self.current.is_none() && !self.targets.is_empty() {
            self.current = Some(0);
        }
    }

    /// All targets in chain order.
    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    /// The focused target, if any.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.current.and_then(|index| self.targets.get(index).copied())
    }

    /// Give focus to the target at `index` in the chain.
    ///
    /// Returns `false` and leaves focus unchanged if `index` is out of range.
    pub fn set_focus(&mut self, index: usize) -> bool {
        if index < self.targets.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_target_gets_focus() {
        let mut list = FocusList::new();
        assert_eq!(list.focused(), None);

        list.extend([FocusTarget::Field(0), FocusTarget::Field(1)]);
        list.extend([FocusTarget::Button(StandardButton::OK)]);
        assert_eq!(list.focused(), Some(FocusTarget::Field(0)));
        assert_eq!(list.targets().len(), 3);
    }

    #[test]
    fn test_set_focus_bounds() {
        let mut list = FocusList::new();
        list.extend([FocusTarget::Field(0), FocusTarget::Field(1)]);

        assert!(list.set_focus(1));
        assert_eq!(list.focused(), Some(FocusTarget::Field(1)));

        assert!(!list.set_focus(2));
        assert_eq!(list.focused(), Some(FocusTarget::Field(1)));
    }
}
