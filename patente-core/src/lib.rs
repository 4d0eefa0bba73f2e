//! Segment alignment and translation distribution for bilingual slides
//!
//! Driving-theory slides pair Italian source text with Persian and English
//! translations, but decks segment the two sides inconsistently: one row may
//! carry the translation for several Italian rows, or a translation may spill
//! into trailing rows that have no Italian text of their own. This crate
//! rebuilds a display-ready one-to-one view of a slide using only row order,
//! punctuation and structure (bullet vs. paragraph).
//!
//! # Architecture
//!
//! - [`segmenter`]: abbreviation-safe sentence splitting
//! - [`classify`]: bullet-like / paragraph-like classification
//! - [`borrow`]: folding of Italian-less English overflow rows
//! - [`distribute`]: spreading of packed Persian sentences
//! - [`render`]: projection into [`RenderBlock`]s, with [`highlight`]ing
//!
//! # Example
//!
//! ```rust
//! use patente_core::{RenderOptions, Segment, Slide, SlideRenderer, TranslationLanguage};
//!
//! let slide = Slide::new(vec![
//!     Segment::new("Para.").with_en("First."),
//!     Segment::new("").with_en("Extra sentence."),
//! ]);
//!
//! let renderer = SlideRenderer::new(
//!     RenderOptions::builder()
//!         .language(TranslationLanguage::En)
//!         .show_translation(true)
//!         .build(),
//! );
//! let rendered = renderer.render(&slide);
//!
//! assert_eq!(rendered.blocks.len(), 1);
//! assert_eq!(rendered.suppressed, vec![1]);
//! let card = rendered.blocks[0].translation.as_ref().unwrap();
//! assert_eq!(card.text, "First. Extra sentence.");
//! ```

pub mod borrow;
pub mod classify;
pub mod config;
pub mod deck;
pub mod distribute;
pub mod error;
pub mod highlight;
pub mod render;
pub mod report;
pub mod segment;
pub mod segmenter;

pub use borrow::{plan_borrowing, BorrowPlan};
pub use classify::{classify, classify_all, StructuralClass};
pub use config::{load_options, HighlightMarker, RenderOptions, TranslationLanguage};
pub use deck::{Deck, Slide};
pub use distribute::{distribute, DistributionMap};
pub use error::{CoreError, Result};
pub use highlight::{escape_html, Highlighter};
pub use render::{
    project, Alignment, ItalianLine, RenderBlock, RenderedSlide, SlideHeader, SlideRenderer,
    TranslationCard,
};
pub use report::{CoverageIssue, CoverageReport};
pub use segment::{Segment, SegmentKind};
pub use segmenter::split_sentences;
