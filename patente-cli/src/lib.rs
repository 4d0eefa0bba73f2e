//! Patente CLI library
//!
//! This library provides the command-line interface over `patente-core`:
//! rendering decks into text, JSON or Markdown and reporting translation
//! coverage.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
