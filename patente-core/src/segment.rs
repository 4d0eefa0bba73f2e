//! Slide segments and lenient field resolution
//!
//! Decks come from hand-edited JSON, so every field is optional and several
//! synonym keys exist for each translation. A [`Segment`] is the resolved,
//! immutable view of one raw row.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Explicit structural hint carried by a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Running text
    Paragraph,
    /// List item
    Li,
    /// Bullet point
    Bullet,
}

impl SegmentKind {
    /// Parse a kind tag, ignoring unknown tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "paragraph" => Some(SegmentKind::Paragraph),
            "li" => Some(SegmentKind::Li),
            "bullet" => Some(SegmentKind::Bullet),
            _ => None,
        }
    }

    /// Get the tag as written in decks
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Paragraph => "paragraph",
            SegmentKind::Li => "li",
            SegmentKind::Bullet => "bullet",
        }
    }

    /// Whether the tag marks a list entry
    pub fn is_list_item(&self) -> bool {
        matches!(self, SegmentKind::Li | SegmentKind::Bullet)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unit of slide content: Italian source plus optional translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSegment")]
pub struct Segment {
    /// Structural hint, if the deck provides a known one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SegmentKind>,
    /// Italian source text (may be empty)
    pub it: String,
    /// Persian translation (first non-empty synonym)
    pub fa: String,
    /// English translation (first non-empty synonym)
    pub en: String,
}

impl Segment {
    /// Create a segment with Italian text only
    pub fn new(it: impl Into<String>) -> Self {
        Self {
            it: it.into(),
            ..Self::default()
        }
    }

    /// Set the kind tag
    pub fn with_kind(mut self, kind: SegmentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the Persian translation
    pub fn with_fa(mut self, fa: impl Into<String>) -> Self {
        self.fa = fa.into();
        self
    }

    /// Set the English translation
    pub fn with_en(mut self, en: impl Into<String>) -> Self {
        self.en = en.into();
        self
    }

    /// Trimmed Italian text
    pub fn italian(&self) -> &str {
        self.it.trim()
    }

    /// Whether the segment has Italian text of its own
    pub fn has_italian(&self) -> bool {
        !self.italian().is_empty()
    }

    /// Trimmed Persian translation
    pub fn persian(&self) -> &str {
        self.fa.trim()
    }

    /// Trimmed English translation
    pub fn english(&self) -> &str {
        self.en.trim()
    }

    /// A segment with no text in any language carries no content and is
    /// dropped before alignment.
    pub fn is_content_bearing(&self) -> bool {
        self.has_italian() || !self.persian().is_empty() || !self.english().is_empty()
    }
}

/// Raw row as found in deck JSON
#[derive(Debug, Default, Deserialize)]
struct RawSegment {
    #[serde(default)]
    kind: Option<Value>,
    #[serde(default)]
    it: Option<Value>,
    #[serde(default)]
    fa: Option<Value>,
    #[serde(default)]
    fa_ir: Option<Value>,
    #[serde(default, rename = "faIR")]
    fa_ir_camel: Option<Value>,
    #[serde(default)]
    persian: Option<Value>,
    #[serde(default)]
    fa_text: Option<Value>,
    #[serde(default)]
    en: Option<Value>,
    #[serde(default)]
    en_us: Option<Value>,
    #[serde(default)]
    english: Option<Value>,
    #[serde(default)]
    en_text: Option<Value>,
}

impl From<RawSegment> for Segment {
    fn from(raw: RawSegment) -> Self {
        let kind = match &raw.kind {
            Some(Value::String(tag)) => SegmentKind::from_tag(tag),
            _ => None,
        };
        let it = match raw.it {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        let fa = first_non_empty(&[
            &raw.fa,
            &raw.fa_ir,
            &raw.fa_ir_camel,
            &raw.persian,
            &raw.fa_text,
        ]);
        let en = first_non_empty(&[&raw.en, &raw.en_us, &raw.english, &raw.en_text]);
        Self { kind, it, fa, en }
    }
}

/// First string candidate with non-blank content, returned untrimmed
fn first_non_empty(candidates: &[&Option<Value>]) -> String {
    candidates
        .iter()
        .find_map(|candidate| match candidate {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}
