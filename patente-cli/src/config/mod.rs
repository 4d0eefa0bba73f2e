//! Configuration module

use anyhow::{Context, Result};
use patente_core::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Render preferences
    #[serde(default)]
    pub display: RenderOptions,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patente_core::TranslationLanguage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml_str(
            "[display]\nlanguage = \"en\"\n[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();
        assert_eq!(config.display.language, TranslationLanguage::En);
        assert!(config.display.highlight);
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_reports_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"pdf\"\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/patente.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
