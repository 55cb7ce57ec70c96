//! Error types for Wobble

use thiserror::Error;

/// The main error type for Wobble operations
#[derive(Debug, Error)]
pub enum WobbleError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Pointer listener closed")]
    ListenerClosed,
}

/// Result type alias for Wobble operations
pub type Result<T> = std::result::Result<T, WobbleError>;

impl From<toml::de::Error> for WobbleError {
    fn from(err: toml::de::Error) -> Self {
        WobbleError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for WobbleError {
    fn from(err: toml::ser::Error) -> Self {
        WobbleError::TomlSerError(err.to_string())
    }
}
