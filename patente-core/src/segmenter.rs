//! Sentence segmentation shared by Italian, Persian and English text
//!
//! A boundary is a zero-width position after a sentence terminal (optionally
//! followed by a closing parenthesis) that is itself followed by whitespace.
//! Known abbreviations are shielded before scanning so their periods never
//! count as terminals.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that end a sentence
pub const TERMINALS: [char; 6] = ['.', '!', '?', ';', '؛', '؟'];

/// Stand-in for periods inside protected abbreviations (ONE DOT LEADER)
const PLACEHOLDER: char = '\u{2024}';

static ABBREVIATIONS: OnceLock<Regex> = OnceLock::new();

fn abbreviation_regex() -> &'static Regex {
    ABBREVIATIONS.get_or_init(|| {
        Regex::new(r"(?i)\b(?:e\.g\.|i\.e\.|es\.)").expect("abbreviation pattern is valid")
    })
}

/// Whether `ch` is a sentence terminal
pub fn is_terminal(ch: char) -> bool {
    TERMINALS.contains(&ch)
}

/// Split `text` into trimmed, non-empty sentences in order.
///
/// Splitting is restartable and side-effect free; the same text always
/// yields the same pieces.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let shielded = abbreviation_regex().replace_all(text, |caps: &regex::Captures<'_>| {
        caps[0].replace('.', &PLACEHOLDER.to_string())
    });

    boundary_offsets(&shielded)
        .into_iter()
        .scan(0usize, |start, end| {
            let piece = &shielded[*start..end];
            *start = end;
            Some(piece)
        })
        .map(|piece| piece.replace(PLACEHOLDER, ".").trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Byte offsets that close each piece, the last one being `text.len()`
fn boundary_offsets(text: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut offsets = Vec::new();

    for (pos, &(idx, ch)) in chars.iter().enumerate() {
        let followed_by_space = chars
            .get(pos + 1)
            .is_some_and(|&(_, next)| next.is_whitespace());
        if !followed_by_space {
            continue;
        }

        let closes_sentence = is_terminal(ch)
            || (ch == ')' && pos > 0 && is_terminal(chars[pos - 1].1));
        if closes_sentence {
            offsets.push(idx + ch.len_utf8());
        }
    }

    offsets.push(text.len());
    offsets
}
