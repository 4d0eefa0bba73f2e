//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Requested slide does not exist in a deck
    SlideNotFound {
        /// Deck the slide was requested from
        source: String,
        /// 1-based slide number requested
        requested: usize,
        /// Number of slides in the deck
        available: usize,
    },
    /// Translation coverage below the requested minimum
    CoverageBelowThreshold {
        /// Language code
        language: String,
        /// Measured coverage in percent
        coverage: f64,
        /// Required coverage in percent
        threshold: f64,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SlideNotFound {
                source,
                requested,
                available,
            } => write!(
                f,
                "Slide {requested} not found in {source} ({available} slides)"
            ),
            CliError::CoverageBelowThreshold {
                language,
                coverage,
                threshold,
            } => write!(
                f,
                "Coverage {language}: {coverage:.2}% is below the required {threshold:.2}%"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
