//! HTML escaping and highlight-term marking for Italian text
//!
//! Terms are matched against the raw text; the gaps and the matched text are
//! escaped separately before markers are inserted, so a marker is the only
//! markup that can appear in the output. All terms are matched in a single
//! leftmost pass. Among terms starting at the same position the longest
//! wins, and a match never nests inside or splits another.

use crate::config::HighlightMarker;
use regex::{Regex, RegexBuilder};

/// Escape `&`, `<` and `>`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Case-insensitive term highlighter
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
    marker: HighlightMarker,
}

impl Highlighter {
    /// Build a highlighter for `terms`. Blank terms are ignored.
    pub fn new<I, S>(terms: I, marker: HighlightMarker) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        if terms.is_empty() {
            return Self::disabled(marker);
        }

        let alternation = terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = match RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!("highlighting disabled, terms do not compile: {e}");
                None
            }
        };

        Self { pattern, marker }
    }

    /// A highlighter that only escapes
    pub fn disabled(marker: HighlightMarker) -> Self {
        Self {
            pattern: None,
            marker,
        }
    }

    /// Whether any term will be marked
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Escape `text` and wrap every term occurrence in the marker
    pub fn highlight(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for found in pattern.find_iter(text) {
            out.push_str(&escape_html(&text[last..found.start()]));
            out.push_str(&self.marker.open);
            out.push_str(&escape_html(found.as_str()));
            out.push_str(&self.marker.close);
            last = found.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter(terms: &[&str]) -> Highlighter {
        Highlighter::new(terms.iter().copied(), HighlightMarker::default())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_single_term_wrapped_once() {
        let out = highlighter(&["corsia"]).highlight("La corsia destra");
        assert_eq!(out, "La <span class=\"hl-it\">corsia</span> destra");
        assert_eq!(out.matches("<span").count(), 1);
    }

    #[test]
    fn test_case_insensitive_keeps_original_case() {
        let out = highlighter(&["corsia"]).highlight("CORSIA e Corsia");
        assert_eq!(
            out,
            "<span class=\"hl-it\">CORSIA</span> e <span class=\"hl-it\">Corsia</span>"
        );
    }

    #[test]
    fn test_longest_term_wins() {
        let out = highlighter(&["corsia", "corsia di emergenza"])
            .highlight("Usa la corsia di emergenza solo se serve");
        assert_eq!(
            out,
            "Usa la <span class=\"hl-it\">corsia di emergenza</span> solo se serve"
        );
    }

    #[test]
    fn test_markup_in_text_is_escaped() {
        let out = highlighter(&["strada"]).highlight("<b>strada</b>");
        assert_eq!(
            out,
            "&lt;b&gt;<span class=\"hl-it\">strada</span>&lt;/b&gt;"
        );
    }

    #[test]
    fn test_terms_with_special_characters() {
        let out = highlighter(&["S.P.", "a & b"]).highlight("Su S.P. e a & b");
        assert_eq!(
            out,
            "Su <span class=\"hl-it\">S.P.</span> e <span class=\"hl-it\">a &amp; b</span>"
        );
    }

    #[test]
    fn test_terms_never_match_inside_entities() {
        let out = highlighter(&["amp"]).highlight("Strade & corsie, ampie");
        assert_eq!(
            out,
            "Strade &amp; corsie, <span class=\"hl-it\">amp</span>ie"
        );

        let out = highlighter(&["t", "l"]).highlight("a < b > c");
        assert_eq!(out, "a &lt; b &gt; c");
    }

    #[test]
    fn test_earlier_match_wins_over_longer_overlap() {
        let out = highlighter(&["ab", "bcd"]).highlight("abcd");
        assert_eq!(out, "<span class=\"hl-it\">ab</span>cd");

        let out = highlighter(&["ab", "abc"]).highlight("abcd");
        assert_eq!(out, "<span class=\"hl-it\">abc</span>d");
    }

    #[test]
    fn test_marker_text_is_never_matched() {
        let out = highlighter(&["span", "class"]).highlight("una span");
        assert_eq!(out, "una <span class=\"hl-it\">span</span>");
    }

    #[test]
    fn test_blank_terms_disable_highlighting() {
        let h = highlighter(&["", "   "]);
        assert!(!h.is_active());
        assert_eq!(h.highlight("a < b"), "a &lt; b");
    }

    #[test]
    fn test_custom_marker() {
        let marker = HighlightMarker {
            open: "[[".to_string(),
            close: "]]".to_string(),
        };
        let out = Highlighter::new(["stop"], marker).highlight("Stop!");
        assert_eq!(out, "[[Stop]]!");
    }
}
