//! Structural classification of segments into bullet-like and paragraph-like
//!
//! Classification is positional: a segment that follows an Italian line ending
//! with a colon continues an enumeration, whatever its own shape. The lookback
//! reads the previous segment's raw text, never its class, so a single
//! left-to-right pass is enough.

use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// Leading glyphs that mark a bullet line
pub const BULLET_GLYPHS: [char; 3] = ['-', '\u{2022}', '\u{00B7}'];

/// The two structural classes used for alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralClass {
    /// List entry
    Bullet,
    /// Running text
    Paragraph,
}

impl StructuralClass {
    /// Whether this is the bullet class
    pub fn is_bullet(self) -> bool {
        self == StructuralClass::Bullet
    }
}

impl From<bool> for StructuralClass {
    fn from(is_bullet: bool) -> Self {
        if is_bullet {
            StructuralClass::Bullet
        } else {
            StructuralClass::Paragraph
        }
    }
}

/// Whether the segment at `index` is bullet-like.
///
/// Rules, first match wins: an explicit `li`/`bullet` kind, a leading bullet
/// glyph, or a previous Italian line ending with `:`. Out-of-range indices are
/// paragraph-like.
pub fn classify(segments: &[Segment], index: usize) -> bool {
    let Some(segment) = segments.get(index) else {
        return false;
    };

    if segment.kind.is_some_and(|kind| kind.is_list_item()) {
        return true;
    }
    if starts_with_bullet_glyph(segment.italian()) {
        return true;
    }
    index > 0 && segments[index - 1].italian().ends_with(':')
}

/// Classify every segment in order
pub fn classify_all(segments: &[Segment]) -> Vec<StructuralClass> {
    let classes: Vec<StructuralClass> = (0..segments.len())
        .map(|index| StructuralClass::from(classify(segments, index)))
        .collect();
    log::trace!(
        "classified {} segments ({} bullet-like)",
        classes.len(),
        classes.iter().filter(|c| c.is_bullet()).count()
    );
    classes
}

/// Whether trimmed text opens with a bullet glyph
pub fn starts_with_bullet_glyph(text: &str) -> bool {
    text.trim_start().starts_with(BULLET_GLYPHS)
}

/// Remove one leading bullet glyph and the whitespace after it
pub fn strip_bullet_glyph(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix(BULLET_GLYPHS) {
        Some(rest) => rest.trim_start(),
        None => trimmed,
    }
}
