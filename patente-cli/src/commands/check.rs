//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use patente_core::{CoverageReport, Deck, TranslationLanguage};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Deck files, directories or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Write the rows missing a translation to this JSON file
    #[arg(long, value_name = "FILE")]
    pub issues: Option<PathBuf>,

    /// Fail when English or Persian coverage is below this percentage
    #[arg(long, value_name = "PERCENT")]
    pub min_coverage: Option<f64>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let files = resolve_patterns(&self.input)?;
        let mut report = CoverageReport::default();

        for path in &files {
            let source = FileReader::source_name(path);
            let text = FileReader::read_text(path)?;
            let deck = Deck::from_json(&text)
                .with_context(|| format!("Failed to parse deck: {}", path.display()))?;
            let deck_report = CoverageReport::from_deck(&source, &deck);
            log::info!(
                "{source}: {} segments, {} missing EN, {} missing FA",
                deck_report.total_segments,
                deck_report.missing_en,
                deck_report.missing_fa
            );
            report.merge(deck_report);
        }

        write_summary(&report, &mut io::stdout().lock())?;

        if let Some(path) = &self.issues {
            let json = serde_json::to_string_pretty(&report.issues)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write issues to {}", path.display()))?;
            println!("QA issues written to {}", path.display());
        }

        if let Some(threshold) = self.min_coverage {
            for language in [TranslationLanguage::En, TranslationLanguage::Fa] {
                let coverage = report.coverage(language);
                if coverage < threshold {
                    return Err(CliError::CoverageBelowThreshold {
                        language: language.code().to_string(),
                        coverage,
                        threshold,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Print the coverage totals
pub fn write_summary<W: Write>(report: &CoverageReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Segments: {}", report.total_segments)?;
    writeln!(writer, "Missing EN: {}", report.missing_en)?;
    writeln!(writer, "Missing FA: {}", report.missing_fa)?;
    writeln!(
        writer,
        "Coverage EN: {:.2}% | FA: {:.2}%",
        report.coverage(TranslationLanguage::En),
        report.coverage(TranslationLanguage::Fa)
    )
}
