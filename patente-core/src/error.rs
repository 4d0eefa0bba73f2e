//! Error types for the fallible edges of the crate
//!
//! The alignment pipeline itself is total. Only deck parsing and option
//! loading can fail.

use thiserror::Error;

/// Errors raised while loading decks or render options
#[derive(Error, Debug)]
pub enum CoreError {
    /// Deck text is not valid JSON
    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a deck or an options file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
