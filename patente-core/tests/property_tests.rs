//! Property tests for the alignment pipeline

use patente_core::{
    classify_all, distribute, split_sentences, RenderOptions, Segment, SegmentKind, Slide,
    SlideRenderer, TranslationLanguage,
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = Option<SegmentKind>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(SegmentKind::Li)),
        1 => Just(Some(SegmentKind::Bullet)),
        1 => Just(Some(SegmentKind::Paragraph)),
    ]
}

fn italian_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        3 => "[a-z]{1,6}( [a-z]{1,6}){0,3}[.:]?",
        2 => "- [a-z]{1,6}(\\. [a-z]{1,6})?",
    ]
}

// Consonant-only words keep "es." and friends out of translations, so
// re-splitting joined overflow text counts the same sentences.
fn translation_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        3 => "([b-df-hj-np-tv-z]{1,5}\\. ){0,3}[b-df-hj-np-tv-z]{1,5}\\.",
    ]
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    (
        kind_strategy(),
        italian_strategy(),
        translation_strategy(),
        translation_strategy(),
    )
        .prop_map(|(kind, it, fa, en)| Segment {
            kind,
            it,
            fa,
            en,
        })
}

fn options_strategy() -> impl Strategy<Value = RenderOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(english, highlight, show)| {
        RenderOptions::builder()
            .language(if english {
                TranslationLanguage::En
            } else {
                TranslationLanguage::Fa
            })
            .highlight(highlight)
            .show_translation(show)
            .build()
    })
}

proptest! {
    #[test]
    fn every_row_is_rendered_or_suppressed_once(
        segments in prop::collection::vec(segment_strategy(), 0..12),
        options in options_strategy(),
    ) {
        let slide = Slide::new(segments).with_terms(["corsia", "a"]);
        let rendered = SlideRenderer::new(options).render(&slide);
        prop_assert!(rendered.covers_all_rows());
        prop_assert_eq!(
            rendered.blocks.len() + rendered.suppressed.len(),
            rendered.segment_count
        );
    }

    #[test]
    fn rendering_twice_is_identical(
        segments in prop::collection::vec(segment_strategy(), 0..12),
        options in options_strategy(),
    ) {
        let slide = Slide::new(segments).with_terms(["uno"]);
        let renderer = SlideRenderer::new(options);
        prop_assert_eq!(renderer.render(&slide), renderer.render(&slide));
    }

    #[test]
    fn split_then_join_restores_single_spaced_text(
        words in prop::collection::vec("[a-zàèéìòù]{1,8}[.!?;,:]?", 1..12),
    ) {
        let text = words.join(" ");
        prop_assert_eq!(split_sentences(&text).join(" "), text);
    }

    #[test]
    fn abbreviations_never_split(
        before in "[a-z]{1,8}",
        abbreviation in prop::sample::select(vec!["e.g.", "i.e.", "es.", "E.G.", "Es."]),
        after in "[a-z]{1,8}",
    ) {
        let text = format!("{before} {abbreviation} {after}");
        let pieces = split_sentences(&text);
        prop_assert_eq!(pieces, vec![text.clone()]);
    }

    #[test]
    fn distribution_conserves_persian_sentences(
        segments in prop::collection::vec(segment_strategy(), 0..12),
    ) {
        let classes = classify_all(&segments);
        let map = distribute(&segments, &classes);

        let expected: usize = segments
            .iter()
            .map(|seg| split_sentences(seg.persian()).len())
            .sum();
        let distributed: usize = map.iter().map(|(_, text)| split_sentences(text).len()).sum();
        prop_assert_eq!(distributed, expected);
    }
}
