//! Deck and slide input model
//!
//! Decks are accepted either as `{ "slides": [...] }` or as a bare array of
//! slides. Anything structurally off degrades to an empty value instead of
//! failing; only text that is not JSON at all is an error.

use crate::error::Result;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One slide of a deck
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSlide")]
pub struct Slide {
    /// Deck-assigned identifier, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Italian title
    pub title_it: String,
    /// Persian title
    pub title_fa: String,
    /// English title
    pub title_en: String,
    /// Italian terms to highlight in the slide body
    pub highlight_terms_it: Vec<String>,
    /// Raw segments in deck order
    pub segments: Vec<Segment>,
}

impl Slide {
    /// Create a slide from segments
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Set the Italian title
    pub fn with_title_it(mut self, title: impl Into<String>) -> Self {
        self.title_it = title.into();
        self
    }

    /// Set the Persian title
    pub fn with_title_fa(mut self, title: impl Into<String>) -> Self {
        self.title_fa = title.into();
        self
    }

    /// Set the highlight terms
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight_terms_it = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Segments that carry text in at least one language, in deck order
    pub fn content_segments(&self) -> Vec<Segment> {
        self.segments
            .iter()
            .filter(|seg| seg.is_content_bearing())
            .cloned()
            .collect()
    }

    /// Best available title for messages and reports
    pub fn display_title(&self) -> &str {
        [&self.title_it, &self.title_en, &self.title_fa]
            .into_iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSlide {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title_it: Option<Value>,
    #[serde(default)]
    title_fa: Option<Value>,
    #[serde(default)]
    title_en: Option<Value>,
    #[serde(default)]
    highlight_terms_it: Option<Value>,
    #[serde(default)]
    segments: Option<Value>,
}

impl From<RawSlide> for Slide {
    fn from(raw: RawSlide) -> Self {
        let id = match raw.id {
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let highlight_terms_it = match raw.highlight_terms_it {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(term) => Some(term),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        let segments = match raw.segments {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value::<Segment>(item).ok())
                .collect(),
            _ => Vec::new(),
        };
        Self {
            id,
            title_it: string_or_empty(raw.title_it),
            title_fa: string_or_empty(raw.title_fa),
            title_en: string_or_empty(raw.title_en),
            highlight_terms_it,
            segments,
        }
    }
}

fn string_or_empty(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

/// An ordered collection of slides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in deck order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Parse deck JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// Read and parse a deck file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build a deck from an already parsed JSON value
    pub fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Object(mut map) => match map.remove("slides") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        let slides = items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value::<Slide>(item).ok())
            .collect::<Vec<_>>();
        log::trace!("loaded deck with {} slides", slides.len());
        Self { slides }
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
