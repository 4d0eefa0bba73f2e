//! End-to-end tests: deck JSON in, rendered slides out

use patente_core::{
    Deck, ItalianLine, RenderOptions, Segment, Slide, SlideRenderer, TranslationLanguage,
};

const CORSIE: &str = include_str!("fixtures/corsie.json");

fn renderer(language: TranslationLanguage) -> SlideRenderer {
    SlideRenderer::new(
        RenderOptions::builder()
            .language(language)
            .show_translation(true)
            .build(),
    )
}

fn card_text(slide: &patente_core::RenderedSlide, index: usize) -> Option<&str> {
    slide
        .block_for(index)
        .and_then(|block| block.translation.as_ref())
        .map(|card| card.text.as_str())
}

#[test]
fn test_fixture_deck_loads() {
    let deck = Deck::from_json(CORSIE).unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.slides[0].id.as_deref(), Some("01-04"));
    assert_eq!(deck.slides[0].segments.len(), 7);
    assert_eq!(deck.slides[0].content_segments().len(), 6);
}

#[test]
fn test_persian_view_of_fixture() {
    let deck = Deck::from_json(CORSIE).unwrap();
    let rendered = renderer(TranslationLanguage::Fa).render(&deck.slides[0]);

    assert!(rendered.covers_all_rows());
    assert_eq!(rendered.suppressed, vec![5]);

    // The packed Persian bullet is spread over the two bullets.
    assert_eq!(card_text(&rendered, 2), Some("یک یا چند خط حرکت."));
    assert_eq!(card_text(&rendered, 3), Some("خط اضطراری (در صورت وجود)."));
    // Paragraph without Persian gets no card.
    assert_eq!(card_text(&rendered, 4), None);
}

#[test]
fn test_english_view_of_fixture() {
    let deck = Deck::from_json(CORSIE).unwrap();
    let rendered = renderer(TranslationLanguage::En).render(&deck.slides[0]);

    assert_eq!(
        card_text(&rendered, 4),
        Some("The emergency lane is used only for emergency stops, e.g. a breakdown. Never for overtaking.")
    );
    assert_eq!(card_text(&rendered, 3), Some("the emergency lane (if present)"));
}

#[test]
fn test_bullets_and_highlighting_in_fixture() {
    let deck = Deck::from_json(CORSIE).unwrap();
    let rendered = renderer(TranslationLanguage::Fa).render(&deck.slides[0]);

    let header = rendered.header.as_ref().unwrap();
    assert_eq!(header.title_it.as_deref(), Some("CORSIE E CARREGGIATE"));

    match &rendered.block_for(3).unwrap().italian {
        ItalianLine::Bullet(lines) => {
            assert_eq!(
                lines,
                &vec!["la <span class=\"hl-it\">corsia di emergenza</span> (se presente)".to_string()]
            );
        }
        other => panic!("expected a bullet, got {other:?}"),
    }

    match &rendered.block_for(1).unwrap().italian {
        ItalianLine::Paragraph(text) => {
            assert_eq!(text, "La <span class=\"hl-it\">carreggiata</span> comprende:");
        }
        other => panic!("expected a paragraph, got {other:?}"),
    }
}

#[test]
fn test_placeholder_persian_is_hidden() {
    let deck = Deck::from_json(CORSIE).unwrap();
    let rendered = renderer(TranslationLanguage::Fa).render(&deck.slides[1]);
    assert_eq!(rendered.blocks.len(), 1);
    assert!(rendered.blocks[0].translation.is_none());
    assert!(rendered.header.as_ref().unwrap().title_fa.is_none());
}

#[test]
fn test_distribution_example() {
    let slide = Slide::new(vec![
        Segment::new("A:"),
        Segment::new("- uno").with_fa("uno it. due it."),
        Segment::new("- due"),
    ]);
    let rendered = renderer(TranslationLanguage::Fa).render(&slide);
    assert_eq!(card_text(&rendered, 1), Some("uno it."));
    assert_eq!(card_text(&rendered, 2), Some("due it."));
}

#[test]
fn test_borrowing_example() {
    let slide = Slide::new(vec![
        Segment::new("Para.").with_en(""),
        Segment::new("").with_en("Extra sentence."),
    ]);
    let rendered = renderer(TranslationLanguage::En).render(&slide);
    assert_eq!(rendered.blocks.len(), 1);
    assert_eq!(rendered.suppressed, vec![1]);
    assert!(card_text(&rendered, 0).unwrap().contains("Extra sentence."));
}

#[test]
fn test_translations_hidden_by_default() {
    let deck = Deck::from_json(CORSIE).unwrap();
    let rendered = SlideRenderer::default().render(&deck.slides[0]);
    assert!(rendered.blocks.iter().all(|block| block.translation.is_none()));
    assert!(rendered.covers_all_rows());
}
