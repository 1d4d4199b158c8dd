//! Labeled form dialog implementation.
//!
//! This module provides [`LabeledFormDialog`], a modal form with one text
//! field per label, an error message line and OK/Cancel buttons.
//!
//! The dialog never closes itself on accept. It emits the response command
//! registered by its listener, and the listener decides whether to close it
//! or to report a problem with [`LabeledFormDialog::set_message`] and keep it
//! open.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_forms::{
//!     BasicDialogHost, CommandId, FixedDisplay, FormContext, LabeledFormDialog, MonospaceFont,
//! };
//! use horizon_forms_core::Rect;
//!
//! let context = FormContext::new(
//!     Arc::new(FixedDisplay::new(1.0, Rect::new(0.0, 0.0, 640.0, 480.0))),
//!     Arc::new(MonospaceFont::default()),
//! );
//! let mut dialog =
//!     LabeledFormDialog::new(BasicDialogHost::new(), &context, &["Name", "Email"], "Enter Info");
//!
//! dialog.set_response_command(Some(CommandId(1)));
//! dialog.command_sent.connect(|event| {
//!     println!("form accepted: {}", event.command);
//! });
//!
//! dialog.show();
//! dialog.set_text("Alice", 0);
//! assert_eq!(dialog.result(0), "Alice");
//! assert_eq!(dialog.result(5), "");
//! ```

use std::sync::Arc;

use horizon_forms_core::logging::targets;
use horizon_forms_core::{Point, Rect, Signal};

use crate::command::{Command, CommandEvent, CommandId};
use crate::config::{FormDialogConfig, Placement};
use crate::dialog::{BasicDialogHost, DialogHost, DialogSurface, DisplayInfo};
use crate::font::FontMetrics;
use crate::layout::{FormLayout, title_bar_height};
use crate::widget::{
    ButtonGroup, FieldKey, FocusList, FocusTarget, StandardButton, StaticText, TextField,
    TextFilter, TextRole,
};

/// Returned by [`LabeledFormDialog::result`] for indices with no field.
const EMPTY_RESULT: &str = "";

/// Shared services a form dialog is built from.
#[derive(Clone)]
pub struct FormContext {
    display: Arc<dyn DisplayInfo>,
    label_font: Arc<dyn FontMetrics>,
    entry_font: Option<Arc<dyn FontMetrics>>,
    config: FormDialogConfig,
}

impl FormContext {
    /// Create a context using `label_font` for layout and text entry.
    pub fn new(display: Arc<dyn DisplayInfo>, label_font: Arc<dyn FontMetrics>) -> Self {
        Self {
            display,
            label_font,
            entry_font: None,
            config: FormDialogConfig::default(),
        }
    }

    /// Use a different font inside the text fields.
    pub fn with_entry_font(mut self, font: Arc<dyn FontMetrics>) -> Self {
        self.entry_font = Some(font);
        self
    }

    /// Set the dialog configuration using builder pattern.
    pub fn with_config(mut self, config: FormDialogConfig) -> Self {
        self.config = config;
        self
    }

    /// The dialog configuration.
    pub fn config(&self) -> &FormDialogConfig {
        &self.config
    }
}

/// How the dialog is placed when it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PositionMode {
    /// The host centers the dialog on screen.
    #[default]
    Centered,
    /// The dialog's top-left corner is pinned to a screen position.
    Anchored(Point),
}

/// A modal form with labeled text fields.
///
/// Fields are addressed by the index of their label. Index-based accessors
/// silently ignore indices with no field.
///
/// # Signals
///
/// - `command_sent(CommandEvent)`: Emitted on accept when a response command
///   is registered
///
/// Slots run while the dispatching call still borrows the dialog, so they must
/// not touch the dialog themselves. Listeners that need to react (close the
/// form, or show an error with [`set_message`](Self::set_message)) should use
/// the event returned by [`handle_command`](Self::handle_command),
/// [`handle_key`](Self::handle_key) or [`click_button`](Self::click_button).
pub struct LabeledFormDialog<H: DialogHost = BasicDialogHost> {
    host: H,
    display: Arc<dyn DisplayInfo>,
    placement: Placement,
    title: String,
    layout: FormLayout,
    labels: Vec<StaticText>,
    fields: Vec<TextField>,
    message: StaticText,
    error_flag: bool,
    buttons: ButtonGroup,
    focus: FocusList,
    surface: DialogSurface,
    position: PositionMode,
    response_command: Option<CommandId>,

    /// Signal emitted when the form is accepted.
    pub command_sent: Signal<CommandEvent>,
}

impl<H: DialogHost> LabeledFormDialog<H> {
    /// Build the dialog and all of its children.
    pub fn new<S: AsRef<str>>(
        host: H,
        context: &FormContext,
        labels: &[S],
        title: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let config = &context.config;
        let font: &dyn FontMetrics = context.label_font.as_ref();
        let entry_font = context
            .entry_font
            .clone()
            .unwrap_or_else(|| context.label_font.clone());

        let layout = FormLayout::compute(
            font,
            labels,
            title_bar_height(font, &title, config),
            config,
        );

        let (label_widgets, fields) = labels
            .iter()
            .zip(&layout.rows)
            .map(|(text, row)| {
                (
                    StaticText::new(text.as_ref(), row.label),
                    TextField::new(entry_font.clone(), row.field),
                )
            })
            .unzip::<_, _, Vec<_>, Vec<_>>();

        let message = StaticText::new("", layout.message).with_role(TextRole::Emphasis);
        let buttons = ButtonGroup::new(
            config.ok_label.as_str(),
            layout.ok_button,
            config.cancel_label.as_str(),
            layout.cancel_button,
        );

        let mut focus = FocusList::new();
        focus.extend((0..fields.len()).map(FocusTarget::Field));
        focus.extend(buttons.buttons().map(|button| FocusTarget::Button(button.kind())));

        Self {
            host,
            display: context.display.clone(),
            placement: config.placement,
            title,
            surface: DialogSurface::new(layout.size),
            layout,
            labels: label_widgets,
            fields,
            message,
            error_flag: false,
            buttons,
            focus,
            position: PositionMode::Centered,
            response_command: None,
            command_sent: Signal::new(),
        }
    }

    // =========================================================================
    // Showing
    // =========================================================================

    /// Open the dialog centered on screen.
    pub fn show(&mut self) {
        self.position = PositionMode::Centered;
        tracing::debug!(target: targets::DIALOG, title = %self.title, "opening centered");
        self.host.open();
    }

    /// Open the dialog at `(x, y)` relative to `boss_rect`.
    ///
    /// The offset is in logical pixels and is multiplied by the display's
    /// scale factor. If the resulting origin falls outside `boss_rect` the
    /// dialog is not opened and nothing changes. Returns whether the dialog
    /// was opened.
    pub fn show_at(&mut self, x: f32, y: f32, boss_rect: Rect) -> bool {
        let scale = self.display.scale_factor();
        let offset = Point::new(x, y).scale(scale);
        let origin = Point::new(boss_rect.left() + offset.x, boss_rect.top() + offset.y);

        if !boss_rect.contains(origin) {
            tracing::debug!(
                target: targets::DIALOG,
                x = origin.x,
                y = origin.y,
                "anchor outside visible area, not opening"
            );
            return false;
        }

        self.position = PositionMode::Anchored(origin);
        tracing::debug!(target: targets::DIALOG, x = origin.x, y = origin.y, "opening anchored");
        self.host.open();
        true
    }

    /// Place the dialog on screen.
    ///
    /// Hosts call this before painting. Anchored dialogs are moved to their
    /// anchor; if that leaves part of the dialog off screen, the configured
    /// [`Placement`] decides whether it is pulled back inside.
    pub fn center(&mut self) {
        let screen = self.display.screen_rect();
        match self.position {
            PositionMode::Centered => self.host.center(&mut self.surface, screen),
            PositionMode::Anchored(origin) => {
                self.surface.set_dst_pos(origin);
                let dst = self.surface.dst_rect();
                if !screen.contains_rect(&dst) {
                    let pos = match self.placement {
                        Placement::Clamp => Point::new(
                            origin.x.min(screen.right() - dst.width()).max(screen.left()),
                            origin.y.min(screen.bottom() - dst.height()).max(screen.top()),
                        ),
                        Placement::Preserve => origin,
                    };
                    self.surface.set_dst_pos(pos);
                }
            }
        }
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        tracing::debug!(target: targets::DIALOG, title = %self.title, "closing");
        self.host.close();
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.host.is_open()
    }

    /// The current placement mode.
    pub fn position_mode(&self) -> PositionMode {
        self.position
    }

    /// The dialog's on-screen placement.
    pub fn surface(&self) -> &DialogSurface {
        &self.surface
    }

    // =========================================================================
    // Message line
    // =========================================================================

    /// Show an error message below the fields.
    ///
    /// The message is cleared by the next edit in any field.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message.set_text(text);
        self.error_flag = true;
    }

    /// The message line.
    pub fn message(&self) -> &str {
        self.message.text()
    }

    /// Whether an error message is showing.
    pub fn has_error(&self) -> bool {
        self.error_flag
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// The text of field `index`, or an empty string if there is no such field.
    pub fn result(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map_or(EMPTY_RESULT, |field| field.text())
    }

    /// Replace the text of field `index`.
    pub fn set_text(&mut self, value: &str, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_text(value);
        }
    }

    /// Restrict which characters can be typed into field `index`.
    pub fn set_text_filter(&mut self, filter: TextFilter, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_filter(Some(filter));
        }
    }

    /// Move keyboard focus to field `index`.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            // Fields occupy the head of the focus chain in index order.
            self.focus.set_focus(index);
        }
    }

    /// The focused child, if any.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.focused()
    }

    /// Number of fields (equal to the number of labels).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The text field at `index`.
    pub fn field(&self, index: usize) -> Option<&TextField> {
        self.fields.get(index)
    }

    /// The label at `index`.
    pub fn label(&self, index: usize) -> Option<&StaticText> {
        self.labels.get(index)
    }

    /// The dialog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The computed geometry.
    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    /// The OK/Cancel buttons.
    pub fn buttons(&self) -> &ButtonGroup {
        &self.buttons
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Register the command emitted when the form is accepted.
    ///
    /// With `None`, accepting the form emits nothing.
    pub fn set_response_command(&mut self, command: Option<CommandId>) {
        self.response_command = command;
    }

    /// The registered response command.
    pub fn response_command(&self) -> Option<CommandId> {
        self.response_command
    }

    /// Dispatch a command from a child widget.
    ///
    /// Returns the event sent to `command_sent`, if the command accepted the
    /// form and a response command is registered.
    pub fn handle_command(&mut self, command: Command, data: i32, id: i32) -> Option<CommandEvent> {
        match command {
            c if c.is_accept() => {
                let event = CommandEvent::new(self.response_command?, 0, 0);
                tracing::debug!(target: targets::DIALOG, command = %event.command, "form accepted");
                self.command_sent.emit(event);
                return Some(event);
            }
            Command::FieldChanged => {
                if self.error_flag {
                    self.message.set_text("");
                    self.error_flag = false;
                }
            }
            Command::FieldCancel => {
                tracing::debug!(target: targets::DIALOG, "field edit cancelled, closing");
                self.host.handle_command(Command::Close, data, id);
            }
            other => self.host.handle_command(other, data, id),
        }
        None
    }

    /// Deliver a keystroke to the focused child.
    ///
    /// Returns the accept event the keystroke produced, if any.
    pub fn handle_key(&mut self, key: FieldKey) -> Option<CommandEvent> {
        match self.focus.focused() {
            Some(FocusTarget::Field(index)) => {
                let command = self.fields.get_mut(index)?.handle_key(key)?;
                self.handle_command(command, 0, 0)
            }
            Some(FocusTarget::Button(_)) | None => None,
        }
    }

    /// Activate one of the dialog's buttons.
    ///
    /// Returns the accept event the click produced, if any.
    pub fn click_button(&mut self, button: StandardButton) -> Option<CommandEvent> {
        let command = self.buttons.click(button)?;
        self.handle_command(command, 0, 0)
    }

    // =========================================================================
    // Host access
    // =========================================================================

    /// The lifecycle host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the lifecycle host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
