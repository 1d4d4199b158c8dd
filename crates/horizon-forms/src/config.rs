//! Dialog configuration.
//!
//! Layout constants and placement policy for form dialogs. Everything has a
//! default, so a config file only needs the keys it wants to change:
//!
//! ```toml
//! field_columns = 48
//! placement = "preserve"
//! ```

use std::path::{Path, PathBuf};

use horizon_forms_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read dialog config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has wrongly-typed values.
    #[error("Invalid dialog config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// What to do when an anchored dialog would not fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Move the dialog so it lies fully inside the screen.
    #[default]
    Clamp,
    /// Keep the anchored origin even if the dialog extends past the screen.
    Preserve,
}

/// Configuration for a labeled form dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDialogConfig {
    /// Dialog width in characters of the label font, excluding borders.
    pub field_columns: u32,
    /// Padding above and below the title text.
    pub title_padding: f32,
    /// Extra width added to the widest button caption.
    pub button_padding: f32,
    /// Caption of the accept button.
    pub ok_label: String,
    /// Caption of the dismiss button.
    pub cancel_label: String,
    /// Anchored placement policy.
    pub placement: Placement,
}

impl Default for FormDialogConfig {
    fn default() -> Self {
        Self {
            field_columns: 39,
            title_padding: 4.0,
            button_padding: 20.0,
            ok_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            placement: Placement::Clamp,
        }
    }
}

impl FormDialogConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded dialog config");
        Ok(config)
    }

    /// Set the field column budget using builder pattern.
    pub fn with_field_columns(mut self, columns: u32) -> Self {
        self.field_columns = columns;
        self
    }

    /// Set the placement policy using builder pattern.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
