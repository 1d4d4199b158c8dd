//! Core systems for Horizon Forms.
//!
//! This crate provides the foundational pieces the dialog crate builds on:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] in screen pixels
//! - **Signal/Slot System**: [`Signal`] for notifying listeners of dialog events
//! - **Logging**: `tracing` target names for filtering
//!
//! # Signal Example
//!
//! ```
//! use horizon_forms_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id).unwrap();
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
