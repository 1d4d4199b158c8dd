//! Dialog lifecycle and display seams.
//!
//! A form dialog does not manage windows itself. Opening, closing, generic
//! centering and the fallback handling of commands belong to a
//! [`DialogHost`]; the visible screen area and HiDPI scale come from a
//! [`DisplayInfo`]. [`BasicDialogHost`] and [`FixedDisplay`] are plain
//! implementations suitable for simple front-ends and tests.

use horizon_forms_core::logging::targets;
use horizon_forms_core::{Point, Rect, Size};

use crate::command::Command;

/// The on-screen placement of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialogSurface {
    dst_rect: Rect,
}

impl DialogSurface {
    /// Create a surface of the given size at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            dst_rect: Rect::from_origin_size(Point::ZERO, size),
        }
    }

    /// The destination rectangle in screen coordinates.
    pub fn dst_rect(&self) -> Rect {
        self.dst_rect
    }

    /// Move the surface so its top-left corner is at `pos`.
    pub fn set_dst_pos(&mut self, pos: Point) {
        self.dst_rect = self.dst_rect.with_origin(pos);
    }
}

/// Information about the display dialogs are shown on.
pub trait DisplayInfo: Send + Sync {
    /// HiDPI multiplier applied to logical coordinates.
    fn scale_factor(&self) -> f32;

    /// The visible screen area.
    fn screen_rect(&self) -> Rect;
}

/// A display with a fixed scale and screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDisplay {
    /// HiDPI multiplier.
    pub scale_factor: f32,
    /// Visible screen area.
    pub screen: Rect,
}

impl FixedDisplay {
    /// Create a display description.
    pub const fn new(scale_factor: f32, screen: Rect) -> Self {
        Self {
            scale_factor,
            screen,
        }
    }
}

impl DisplayInfo for FixedDisplay {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn screen_rect(&self) -> Rect {
        self.screen
    }
}

/// Lifecycle operations a dialog delegates to its host.
pub trait DialogHost {
    /// Show the dialog on top of the modal stack.
    fn open(&mut self);

    /// Remove the dialog from the modal stack.
    fn close(&mut self);

    /// Whether the dialog is currently open.
    fn is_open(&self) -> bool;

    /// Generic placement: center `surface` within `screen`.
    fn center(&mut self, surface: &mut DialogSurface, screen: Rect);

    /// Default handling for commands the dialog does not handle itself.
    fn handle_command(&mut self, command: Command, data: i32, id: i32);
}

/// A minimal [`DialogHost`] that tracks open state.
///
/// `Command::Close` closes the dialog; every other forwarded command is
/// recorded and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicDialogHost {
    open: bool,
    last_command: Option<(Command, i32, i32)>,
}

impl BasicDialogHost {
    /// Create a closed host.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent command forwarded to [`DialogHost::handle_command`].
    pub fn last_command(&self) -> Option<(Command, i32, i32)> {
        self.last_command
    }
}

impl DialogHost for BasicDialogHost {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn center(&mut self, surface: &mut DialogSurface, screen: Rect) {
        let size = surface.dst_rect().size;
        let x = screen.left() + ((screen.width() - size.width) / 2.0).floor();
        let y = screen.top() + ((screen.height() - size.height) / 2.0).floor();
        surface.set_dst_pos(Point::new(x, y));
    }

    fn handle_command(&mut self, command: Command, data: i32, id: i32) {
        self.last_command = Some((command, data, id));
        if command == Command::Close {
            tracing::debug!(target: targets::DIALOG, "closing dialog");
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut host = BasicDialogHost::new();
        assert!(!host.is_open());
        host.open();
        assert!(host.is_open());
        host.close();
        assert!(!host.is_open());
    }

    #[test]
    fn test_close_command_closes() {
        let mut host = BasicDialogHost::new();
        host.open();
        host.handle_command(Command::Close, 3, 4);
        assert!(!host.is_open());
        assert_eq!(host.last_command(), Some((Command::Close, 3, 4)));
    }

    #[test]
    fn test_other_commands_are_recorded_only() {
        let mut host = BasicDialogHost::new();
        host.open();
        host.handle_command(Command::Ok, 0, 0);
        assert!(host.is_open());
        assert_eq!(host.last_command(), Some((Command::Ok, 0, 0)));
    }

    #[test]
    fn test_center() {
        let mut host = BasicDialogHost::new();
        let mut surface = DialogSurface::new(Size::new(100.0, 50.0));
        host.center(&mut surface, Rect::new(10.0, 20.0, 301.0, 200.0));
        assert_eq!(surface.dst_rect(), Rect::new(110.0, 95.0, 100.0, 50.0));
    }
}
