//! Distribution of packed Persian translations across sibling rows
//!
//! When one row's Persian field holds the sentences for several rows, each
//! extra sentence moves forward to the next free row of the same structural
//! class. A row is free when it has neither a Persian text of its own nor an
//! assignment. Sentences that find no free row are appended to the last row
//! that received one.

use crate::classify::StructuralClass;
use crate::segment::Segment;
use crate::segmenter::split_sentences;
use serde::Serialize;

/// Resolved Persian text per segment index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistributionMap {
    entries: Vec<Option<String>>,
}

impl DistributionMap {
    fn with_len(len: usize) -> Self {
        Self {
            entries: vec![None; len],
        }
    }

    /// Resolved Persian text for `index`, if one was assigned
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries
            .get(index)
            .and_then(|entry| entry.as_deref())
    }

    /// Whether `index` has an assignment
    pub fn is_assigned(&self, index: usize) -> bool {
        self.get(index).is_some_and(|text| !text.is_empty())
    }

    /// Number of rows covered by the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map covers no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assigned entries in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_deref().map(|text| (index, text)))
    }

    fn set(&mut self, index: usize, text: String) {
        self.entries[index] = Some(text);
    }

    fn append(&mut self, index: usize, text: &str) {
        match &mut self.entries[index] {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(text);
            }
            slot => *slot = Some(text.to_string()),
        }
    }
}

/// A row whose Persian field splits into more than one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
struct PackedRow {
    index: usize,
    sentences: Vec<String>,
}

/// Build the Persian distribution map.
///
/// The result depends only on row order, emptiness of each Persian field and
/// structural class.
pub fn distribute(segments: &[Segment], classes: &[StructuralClass]) -> DistributionMap {
    debug_assert_eq!(segments.len(), classes.len());
    let own: Vec<&str> = segments.iter().map(Segment::persian).collect();
    let mut map = DistributionMap::with_len(segments.len());

    let packed: Vec<PackedRow> = own
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let sentences = split_sentences(text);
            (sentences.len() > 1).then_some(PackedRow { index, sentences })
        })
        .collect();

    copy_single_sentences(&own, &mut map);

    for row in &packed {
        spread_packed_row(row, &own, classes, &mut map);
    }

    copy_single_sentences(&own, &mut map);

    if !packed.is_empty() {
        log::debug!(
            "distributed {} packed Persian rows over {} rows",
            packed.len(),
            segments.len()
        );
    }
    map
}

fn copy_single_sentences(own: &[&str], map: &mut DistributionMap) {
    for (index, text) in own.iter().enumerate() {
        if text.is_empty() || map.is_assigned(index) {
            continue;
        }
        if split_sentences(text).len() <= 1 {
            map.set(index, text.to_string());
        }
    }
}

fn spread_packed_row(
    row: &PackedRow,
    own: &[&str],
    classes: &[StructuralClass],
    map: &mut DistributionMap,
) {
    let class = classes[row.index];
    let mut sentences = row.sentences.iter();
    let Some(first) = sentences.next() else {
        return;
    };
    map.set(row.index, first.clone());

    let mut cursor = row.index + 1;
    let mut last_assigned = row.index;
    for sentence in sentences {
        while cursor < own.len()
            && (map.is_assigned(cursor) || !own[cursor].is_empty() || classes[cursor] != class)
        {
            cursor += 1;
        }

        if cursor >= own.len() {
            log::trace!("no free row left; appending to row {last_assigned}");
            map.append(last_assigned, sentence);
            continue;
        }

        map.set(cursor, sentence.clone());
        last_assigned = cursor;
        cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_all;
    use crate::segment::SegmentKind;

    fn run(segments: &[Segment]) -> DistributionMap {
        distribute(segments, &classify_all(segments))
    }

    fn entries(map: &DistributionMap) -> Vec<(usize, String)> {
        map.iter().map(|(i, t)| (i, t.to_string())).collect()
    }

    #[test]
    fn test_packed_bullet_spreads_to_next_bullet() {
        let segments = vec![
            Segment::new("A:"),
            Segment::new("- uno").with_fa("uno it. due it."),
            Segment::new("- due"),
        ];
        let map = run(&segments);
        assert_eq!(
            entries(&map),
            vec![(1, "uno it.".to_string()), (2, "due it.".to_string())]
        );
    }

    #[test]
    fn test_single_sentences_are_copied_verbatim() {
        let segments = vec![
            Segment::new("Uno.").with_fa("  یک  "),
            Segment::new("Due."),
        ];
        let map = run(&segments);
        assert_eq!(map.get(0), Some("یک"));
        assert_eq!(map.get(1), None);
    }

    #[test]
    fn test_skips_rows_with_own_persian_and_other_class() {
        let segments = vec![
            Segment::new("Primo.").with_fa("اول. دوم. سوم."),
            Segment::new("- voce"),
            Segment::new("Secondo.").with_fa("خودش."),
            Segment::new("Terzo."),
            Segment::new("Quarto."),
        ];
        let map = run(&segments);
        assert_eq!(map.get(0), Some("اول."));
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(2), Some("خودش."));
        assert_eq!(map.get(3), Some("دوم."));
        assert_eq!(map.get(4), Some("سوم."));
    }

    #[test]
    fn test_overflow_appends_to_last_assigned() {
        let segments = vec![
            Segment::new("Uno.").with_fa("الف. ب. پ. ت."),
            Segment::new("Due."),
        ];
        let map = run(&segments);
        assert_eq!(map.get(0), Some("الف."));
        assert_eq!(map.get(1), Some("ب. پ. ت."));
    }

    #[test]
    fn test_overflow_without_any_free_row_stays_on_packed_row() {
        let segments = vec![Segment::new("Solo.").with_fa("یک. دو.")];
        let map = run(&segments);
        assert_eq!(map.get(0), Some("یک. دو."));
    }

    #[test]
    fn test_two_packed_rows_do_not_collide() {
        let segments = vec![
            Segment::new("- a").with_kind(SegmentKind::Bullet).with_fa("a1. a2."),
            Segment::new("- b").with_kind(SegmentKind::Bullet).with_fa("b1. b2."),
            Segment::new("- c"),
            Segment::new("- d"),
        ];
        let map = run(&segments);
        assert_eq!(map.get(0), Some("a1."));
        assert_eq!(map.get(1), Some("b1."));
        assert_eq!(map.get(2), Some("a2."));
        assert_eq!(map.get(3), Some("b2."));
    }

    #[test]
    fn test_empty_input() {
        let map = run(&[]);
        assert!(map.is_empty());
        assert!(!map.is_assigned(0));
    }
}
