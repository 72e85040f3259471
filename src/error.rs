//! Error types for Coordinate Pad.
//!
//! Only configuration loading and color parsing can fail. Everything the
//! user does in the pad itself is either applied or silently ignored.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Coordinate Pad operations.
pub type Result<T> = std::result::Result<T, PadError>;

/// Errors that can occur in Coordinate Pad.
#[derive(Debug, Error)]
pub enum PadError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`PadConfig`](crate::config::PadConfig).
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A color string is not a `#rgb`, `#rrggbb` or `#rrggbbaa` hex value.
    #[error("Invalid color: {input:?}")]
    InvalidColor { input: String },
}

impl PadError {
    /// Create a ConfigRead error.
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidColor error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }
}
