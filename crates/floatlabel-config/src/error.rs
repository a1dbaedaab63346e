//! Error types for configuration loading and attribute parsing.

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or resolving float label configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for the expected schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color attribute could not be parsed.
    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    /// An enumerated attribute carried an unknown value.
    #[error("invalid value {value:?} for attribute `{attribute}`")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },
}
