//! Render options
//!
//! The view's toggles (translation language, highlighting, translation
//! display, header) are passed explicitly into every render instead of being
//! read from shared state.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Placeholder a deck uses for a missing translation
pub const MISSING_TRANSLATION: &str = "—";

/// Language of the translation card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationLanguage {
    /// Persian
    #[default]
    Fa,
    /// English
    En,
}

impl TranslationLanguage {
    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            TranslationLanguage::Fa => "fa",
            TranslationLanguage::En => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            TranslationLanguage::Fa => "Persian",
            TranslationLanguage::En => "English",
        }
    }
}

impl FromStr for TranslationLanguage {
    type Err = CoreError;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "fa" | "fas" | "persian" | "farsi" => Ok(TranslationLanguage::Fa),
            "en" | "eng" | "english" => Ok(TranslationLanguage::En),
            other => Err(CoreError::Config(format!(
                "unsupported translation language '{other}'"
            ))),
        }
    }
}

impl fmt::Display for TranslationLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Markup wrapped around highlighted terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarker {
    /// Opening markup
    pub open: String,
    /// Closing markup
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            open: "<span class=\"hl-it\">".to_string(),
            close: "</span>".to_string(),
        }
    }
}

/// Display toggles for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Language of the translation card
    pub language: TranslationLanguage,
    /// Mark highlight terms in Italian text
    pub highlight: bool,
    /// Show translation cards
    pub show_translation: bool,
    /// Omit the slide header
    pub hide_header: bool,
    /// Highlight markup
    pub marker: HighlightMarker,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: TranslationLanguage::Fa,
            highlight: true,
            show_translation: false,
            hide_header: false,
            marker: HighlightMarker::default(),
        }
    }
}

impl RenderOptions {
    /// Create a builder
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize options to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Whether the Persian distribution pass is needed
    pub fn distributes_persian(&self) -> bool {
        self.show_translation && self.language == TranslationLanguage::Fa
    }
}

/// Builder for [`RenderOptions`]
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    /// Set the translation language
    pub fn language(mut self, language: TranslationLanguage) -> Self {
        self.options.language = language;
        self
    }

    /// Enable or disable term highlighting
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.options.highlight = highlight;
        self
    }

    /// Enable or disable translation cards
    pub fn show_translation(mut self, show: bool) -> Self {
        self.options.show_translation = show;
        self
    }

    /// Hide or show the slide header
    pub fn hide_header(mut self, hide: bool) -> Self {
        self.options.hide_header = hide;
        self
    }

    /// Set the highlight markup
    pub fn marker(mut self, marker: HighlightMarker) -> Self {
        self.options.marker = marker;
        self
    }

    /// Build the options
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Load render options from a TOML file
pub fn load_options(path: &Path) -> Result<RenderOptions> {
    let text = std::fs::read_to_string(path)?;
    RenderOptions::from_toml_str(&text).map_err(|e| match e {
        CoreError::Config(msg) => CoreError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}
