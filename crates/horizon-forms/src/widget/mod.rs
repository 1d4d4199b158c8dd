//! Child widgets composed by form dialogs.
//!
//! Widgets hold text and geometry and translate input into
//! [`Command`](crate::Command)s. Drawing is left to the host application's
//! renderer.

mod button_group;
mod focus;
mod static_text;
mod text_field;

pub use button_group::{Button, ButtonGroup, StandardButton};
pub use focus::{FocusList, FocusTarget};
pub use static_text::{StaticText, TextRole};
pub use text_field::{FieldKey, TextField, TextFilter, text_filter};
