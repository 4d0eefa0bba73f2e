//! Render projection: from aligned segments to display blocks
//!
//! [`SlideRenderer`] runs the whole pipeline for one slide:
//!
//! 1. drop rows without text in any language
//! 2. classify every row (one left-to-right pass)
//! 3. plan English borrowing and suppression
//! 4. distribute packed Persian text (Persian cards only)
//! 5. project each row into at most one [`RenderBlock`]
//!
//! Every row that survives step 1 is either listed in
//! [`RenderedSlide::suppressed`] or is the index of exactly one block.

use crate::borrow::{plan_borrowing, BorrowPlan};
use crate::classify::{classify_all, strip_bullet_glyph, StructuralClass};
use crate::config::{RenderOptions, TranslationLanguage, MISSING_TRANSLATION};
use crate::deck::Slide;
use crate::distribute::{distribute, DistributionMap};
use crate::highlight::Highlighter;
use crate::segment::Segment;
use crate::segmenter::split_sentences;
use serde::Serialize;
use std::collections::HashSet;

/// Italian content of a block, already escaped and highlighted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum ItalianLine {
    /// Row without Italian text; only its card is shown
    None,
    /// Running text shown as one paragraph
    Paragraph(String),
    /// Bullet shown as one sub-line per sentence
    Bullet(Vec<String>),
}

impl ItalianLine {
    /// Whether there is Italian text to show
    pub fn is_empty(&self) -> bool {
        matches!(self, ItalianLine::None)
    }
}

/// Translation shown under a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationCard {
    /// Language of the text
    pub language: TranslationLanguage,
    /// Card text, never empty and never the missing-translation placeholder
    pub text: String,
}

/// One display unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderBlock {
    /// Index of the source row among the slide's content rows
    pub index: usize,
    /// Structural class of the source row
    pub class: StructuralClass,
    /// Italian content
    pub italian: ItalianLine,
    /// Translation card, when enabled and available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationCard>,
}

impl RenderBlock {
    /// Whether the block shows nothing at all
    pub fn is_blank(&self) -> bool {
        self.italian.is_empty() && self.translation.is_none()
    }
}

/// Slide titles shown above the blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideHeader {
    /// Italian title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_it: Option<String>,
    /// Persian subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fa: Option<String>,
}

impl SlideHeader {
    /// Build a header from titles; `None` when both are blank
    pub fn from_titles(title_it: &str, title_fa: &str) -> Option<Self> {
        let title_it = non_blank(title_it);
        let title_fa = non_blank(title_fa);
        if title_it.is_none() && title_fa.is_none() {
            return None;
        }
        Some(Self { title_it, title_fa })
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlide {
    /// Header, unless hidden or empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<SlideHeader>,
    /// Blocks in row order
    pub blocks: Vec<RenderBlock>,
    /// Rows folded into an earlier block
    pub suppressed: Vec<usize>,
    /// Number of content rows the pass consumed
    pub segment_count: usize,
}

impl RenderedSlide {
    /// Block rendered for row `index`, if any
    pub fn block_for(&self, index: usize) -> Option<&RenderBlock> {
        self.blocks.iter().find(|block| block.index == index)
    }

    /// Whether every consumed row is either suppressed or rendered exactly once
    pub fn covers_all_rows(&self) -> bool {
        let mut seen = vec![0usize; self.segment_count];
        for index in self
            .blocks
            .iter()
            .map(|block| block.index)
            .chain(self.suppressed.iter().copied())
        {
            match seen.get_mut(index) {
                Some(count) => *count += 1,
                None => return false,
            }
        }
        seen.iter().all(|&count| count == 1)
    }
}

/// Derived, index-parallel data for one list of content rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Structural class per row
    pub classes: Vec<StructuralClass>,
    /// Suppression flags and borrowed English sentences
    pub borrowing: BorrowPlan,
    /// Persian distribution, computed only for Persian cards
    pub distribution: Option<DistributionMap>,
}

impl Alignment {
    /// Run classification, borrowing and (when needed) distribution
    pub fn compute(segments: &[Segment], options: &RenderOptions) -> Self {
        let classes = classify_all(segments);
        let borrowing = plan_borrowing(segments, &classes);
        let distribution = options
            .distributes_persian()
            .then(|| distribute(segments, &classes));
        Self {
            classes,
            borrowing,
            distribution,
        }
    }
}

/// Project aligned rows into display blocks.
///
/// Returns the blocks and the indices of suppressed rows.
pub fn project(
    segments: &[Segment],
    alignment: &Alignment,
    highlighter: &Highlighter,
    options: &RenderOptions,
) -> (Vec<RenderBlock>, Vec<usize>) {
    let mut blocks = Vec::with_capacity(segments.len());
    let mut suppressed = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        if alignment.borrowing.is_suppressed(index) {
            suppressed.push(index);
            continue;
        }

        let class = alignment.classes[index];
        let italian = italian_line(segment, class, highlighter);
        let translation = if options.show_translation {
            translation_card(index, segment, alignment, options.language)
        } else {
            None
        };

        blocks.push(RenderBlock {
            index,
            class,
            italian,
            translation,
        });
    }

    (blocks, suppressed)
}

fn italian_line(segment: &Segment, class: StructuralClass, highlighter: &Highlighter) -> ItalianLine {
    if !segment.has_italian() {
        return ItalianLine::None;
    }
    if !class.is_bullet() {
        return ItalianLine::Paragraph(highlighter.highlight(segment.italian()));
    }

    let body = strip_bullet_glyph(segment.italian());
    let mut sentences = split_sentences(body);
    if sentences.is_empty() {
        sentences.push(body.to_string());
    }
    ItalianLine::Bullet(
        sentences
            .iter()
            .map(|sentence| highlighter.highlight(sentence))
            .collect(),
    )
}

fn translation_card(
    index: usize,
    segment: &Segment,
    alignment: &Alignment,
    language: TranslationLanguage,
) -> Option<TranslationCard> {
    let text = match language {
        TranslationLanguage::Fa => alignment
            .distribution
            .as_ref()
            .and_then(|map| map.get(index))
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| segment.persian())
            .to_string(),
        TranslationLanguage::En => {
            english_text(segment, alignment.borrowing.attachments_for(index))
        }
    };

    if text.is_empty() || text == MISSING_TRANSLATION {
        return None;
    }
    Some(TranslationCard { language, text })
}

/// Own English sentences followed by borrowed ones, exact duplicates removed
fn english_text(segment: &Segment, borrowed: &[String]) -> String {
    let own = split_sentences(segment.english());
    let mut seen = HashSet::new();
    own.iter()
        .chain(borrowed)
        .map(|sentence| sentence.trim())
        .filter(|sentence| !sentence.is_empty() && seen.insert(*sentence))
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Renders slides with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct SlideRenderer {
    options: RenderOptions,
}

impl SlideRenderer {
    /// Create a renderer
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options used by this renderer
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one slide
    pub fn render(&self, slide: &Slide) -> RenderedSlide {
        let header = if self.options.hide_header {
            None
        } else {
            SlideHeader::from_titles(&slide.title_it, &slide.title_fa)
        };
        let segments = slide.content_segments();
        let mut rendered = self.render_segments(&segments, &slide.highlight_terms_it);
        rendered.header = header;
        rendered
    }

    /// Render content rows directly, without a header
    pub fn render_segments(&self, segments: &[Segment], terms: &[String]) -> RenderedSlide {
        let alignment = Alignment::compute(segments, &self.options);
        let highlighter = if self.options.highlight {
            Highlighter::new(terms, self.options.marker.clone())
        } else {
            Highlighter::disabled(self.options.marker.clone())
        };

        let (blocks, suppressed) = project(segments, &alignment, &highlighter, &self.options);
        log::debug!(
            "rendered {} blocks, {} suppressed rows",
            blocks.len(),
            suppressed.len()
        );

        RenderedSlide {
            header: None,
            blocks,
            suppressed,
            segment_count: segments.len(),
        }
    }
}
