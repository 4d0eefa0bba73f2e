//! Deck file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads deck files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, dropping a leading byte order mark
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        match content.strip_prefix('\u{feff}') {
            Some(stripped) => Ok(stripped.to_string()),
            None => Ok(content),
        }
    }

    /// Name used for a deck in reports and output
    pub fn source_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
