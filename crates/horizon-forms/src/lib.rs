//! Modal labeled-form dialogs for Horizon Forms.
//!
//! The centerpiece is [`LabeledFormDialog`]: given a list of labels and a
//! title, it lays out one text field per label, an error message line and
//! OK/Cancel buttons, and routes input from those children:
//!
//! - accepting the form (OK, or Enter in a field) emits the listener's
//!   registered [`CommandId`] without closing the dialog
//! - editing any field clears a previously shown error message
//! - Escape in a field closes the dialog
//!
//! Window management, rendering and font rasterization stay with the host
//! application, which plugs in through [`DialogHost`], [`DisplayInfo`] and
//! [`FontMetrics`].
//!
//! # Modules
//!
//! - [`layout`]: geometry computed from font metrics
//! - [`widget`]: labels, text fields, buttons and the focus chain
//! - [`config`]: layout constants and placement policy, loadable from TOML
//! - [`dialog`]: host and display seams

pub mod command;
pub mod config;
pub mod dialog;
pub mod font;
mod form_dialog;
pub mod layout;
pub mod widget;

pub use command::{Command, CommandEvent, CommandId};
pub use config::{ConfigError, FormDialogConfig, Placement};
pub use dialog::{BasicDialogHost, DialogHost, DialogSurface, DisplayInfo, FixedDisplay};
pub use font::{FontMetrics, MonospaceFont};
pub use form_dialog::{FormContext, LabeledFormDialog, PositionMode};
pub use layout::{FormLayout, RowLayout};
pub use widget::{
    ButtonGroup, FieldKey, FocusTarget, StandardButton, StaticText, TextField, TextFilter,
    TextRole, text_filter,
};
