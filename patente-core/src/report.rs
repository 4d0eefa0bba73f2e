//! Translation coverage report over raw deck rows

use crate::config::TranslationLanguage;
use crate::deck::Deck;
use serde::{Deserialize, Serialize};

/// One row missing a translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageIssue {
    /// Deck the row came from (usually a file name)
    pub source: String,
    /// Title of the slide holding the row
    pub slide_title: String,
    /// Italian text of the row
    pub it: String,
    /// Language that is missing
    pub missing: TranslationLanguage,
}

/// Counts of rows with and without translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Rows inspected
    pub total_segments: usize,
    /// Rows without an English translation
    pub missing_en: usize,
    /// Rows without a Persian translation
    pub missing_fa: usize,
    /// One entry per missing translation
    pub issues: Vec<CoverageIssue>,
}

impl CoverageReport {
    /// Inspect every raw row of `deck`
    pub fn from_deck(source: &str, deck: &Deck) -> Self {
        let mut report = Self::default();
        for slide in &deck.slides {
            for segment in &slide.segments {
                report.total_segments += 1;
                let issue = |missing| CoverageIssue {
                    source: source.to_string(),
                    slide_title: slide.display_title().to_string(),
                    it: segment.italian().to_string(),
                    missing,
                };
                if segment.english().is_empty() {
                    report.missing_en += 1;
                    report.issues.push(issue(TranslationLanguage::En));
                }
                if segment.persian().is_empty() {
                    report.missing_fa += 1;
                    report.issues.push(issue(TranslationLanguage::Fa));
                }
            }
        }
        report
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: CoverageReport) {
        self.total_segments += other.total_segments;
        self.missing_en += other.missing_en;
        self.missing_fa += other.missing_fa;
        self.issues.extend(other.issues);
    }

    /// Percentage of rows that have a translation in `language`
    pub fn coverage(&self, language: TranslationLanguage) -> f64 {
        let missing = match language {
            TranslationLanguage::En => self.missing_en,
            TranslationLanguage::Fa => self.missing_fa,
        };
        let total = self.total_segments.max(1) as f64;
        (self.total_segments - missing) as f64 / total * 100.0
    }
}
