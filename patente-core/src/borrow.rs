//! Borrowing of overflow English text from Italian-less trailing rows
//!
//! Decks sometimes split one long Italian line across several rows where only
//! the first row keeps the Italian text and the rest carry the remaining
//! English sentences. Those trailing rows are folded into their anchor: the
//! closest preceding row of the same structural class that has Italian text.

use crate::classify::StructuralClass;
use crate::segment::Segment;
use crate::segmenter::split_sentences;
use serde::Serialize;

/// Result of the borrowing pass, indexed by segment position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BorrowPlan {
    /// Rows folded into an earlier anchor; they must not render on their own
    pub suppressed: Vec<bool>,
    /// English sentences borrowed by each anchor, in order
    pub attachments: Vec<Vec<String>>,
}

impl BorrowPlan {
    fn with_len(len: usize) -> Self {
        Self {
            suppressed: vec![false; len],
            attachments: vec![Vec::new(); len],
        }
    }

    /// Whether the row at `index` was folded into an anchor
    pub fn is_suppressed(&self, index: usize) -> bool {
        self.suppressed.get(index).copied().unwrap_or(false)
    }

    /// Sentences borrowed by the anchor at `index`
    pub fn attachments_for(&self, index: usize) -> &[String] {
        self.attachments.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of suppressed rows
    pub fn suppressed_count(&self) -> usize {
        self.suppressed.iter().filter(|&&s| s).count()
    }
}

/// Compute suppression flags and borrowed sentences.
///
/// Bullet anchors are scanned first, then paragraph anchors. A scan stops at
/// the first row that has Italian text or a different class, so the two
/// scans never claim the same row.
pub fn plan_borrowing(segments: &[Segment], classes: &[StructuralClass]) -> BorrowPlan {
    debug_assert_eq!(segments.len(), classes.len());
    let mut plan = BorrowPlan::with_len(segments.len());

    for anchor_class in [StructuralClass::Bullet, StructuralClass::Paragraph] {
        for anchor in 0..segments.len() {
            if classes[anchor] != anchor_class || !segments[anchor].has_italian() {
                continue;
            }
            absorb_run(segments, classes, anchor, &mut plan);
        }
    }

    if plan.suppressed_count() > 0 {
        log::debug!(
            "borrowing folded {} of {} rows into earlier anchors",
            plan.suppressed_count(),
            segments.len()
        );
    }
    plan
}

fn absorb_run(
    segments: &[Segment],
    classes: &[StructuralClass],
    anchor: usize,
    plan: &mut BorrowPlan,
) {
    let class = classes[anchor];
    let mut next = anchor + 1;

    while next < segments.len() {
        let row = &segments[next];
        if classes[next] != class || row.has_italian() {
            break;
        }

        let sentences = split_sentences(row.english());
        log::trace!(
            "row {next} lends {} English sentences to row {anchor}",
            sentences.len()
        );
        plan.attachments[anchor].extend(sentences);
        plan.suppressed[next] = true;
        next += 1;
    }
}
