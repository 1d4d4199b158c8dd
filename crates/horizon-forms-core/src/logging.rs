//! Logging facilities for Horizon Forms.
//!
//! Horizon Forms uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; applications do that themselves:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_forms::dialog=debug`.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_forms_core::signal";
    /// Dialog lifecycle and command dispatch target.
    pub const DIALOG: &str = "horizon_forms::dialog";
    /// Layout computation target.
    pub const LAYOUT: &str = "horizon_forms::layout";
    /// Text field editing target.
    pub const FIELD: &str = "horizon_forms::field";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_forms::config";
}
