//! Command codes routed between widgets, dialogs and their listeners.

use std::fmt;

/// An application-defined command identifier.
///
/// Listeners register one of these with a dialog and receive it back in a
/// [`CommandEvent`] when the dialog is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub u32);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A command delivered to a dialog's dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// The OK button was activated.
    Ok,
    /// Generic request to close the dialog.
    Close,
    /// A text field committed its contents (Enter).
    FieldAccept,
    /// A text field's contents changed.
    FieldChanged,
    /// A text field's edit was cancelled (Escape).
    FieldCancel,
    /// Any other application-defined command.
    User(CommandId),
}

impl Command {
    /// Check if this command means "the user confirmed the form".
    pub fn is_accept(&self) -> bool {
        matches!(self, Command::Ok | Command::FieldAccept)
    }
}

/// The payload a listener receives from a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEvent {
    /// The command identifier registered by the listener.
    pub command: CommandId,
    /// Command-specific data.
    pub data: i32,
    /// Identifier of the sending widget.
    pub id: i32,
}

impl CommandEvent {
    /// Create a new command event.
    pub const fn new(command: CommandId, data: i32, id: i32) -> Self {
        Self { command, data, id }
    }
}
