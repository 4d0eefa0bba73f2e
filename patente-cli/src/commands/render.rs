//! Render command implementation

use anyhow::{Context, Result};
use clap::Args;
use patente_core::{Deck, RenderOptions, Slide, SlideRenderer, TranslationLanguage};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Deck files, directories or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Translation language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Show translation cards
    #[arg(short, long)]
    pub translate: bool,

    /// Do not mark highlight terms
    #[arg(long)]
    pub no_highlight: bool,

    /// Omit slide headers
    #[arg(long)]
    pub hide_header: bool,

    /// Render only this slide (1-based) of each deck
    #[arg(short, long, value_name = "N")]
    pub slide: Option<usize>,

    /// Preferences file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported translation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// Persian, with packed sentences spread over sibling rows
    Fa,
    /// English, with overflow rows folded into their anchor
    En,
}

impl From<Language> for TranslationLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::Fa => TranslationLanguage::Fa,
            Language::En => TranslationLanguage::En,
        }
    }
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting render");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let options = self.render_options(config.display);
        let format = self.format.unwrap_or(config.output.default_format);
        log::debug!("Render options: {:?}", options);

        let files = resolve_patterns(&self.input)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        let renderer = SlideRenderer::new(options);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_decks(files.len() as u64);

        for path in &files {
            let source = FileReader::source_name(path);
            let text = FileReader::read_text(path)?;
            let deck = Deck::from_json(&text)
                .with_context(|| format!("Failed to parse deck: {}", path.display()))?;
            log::info!("{source}: {} slides", deck.len());

            for (position, slide) in self.selected_slides(&source, &deck)? {
                let rendered = renderer.render(slide);
                log::debug!(
                    "{source} slide {position}: {} blocks, {} suppressed",
                    rendered.blocks.len(),
                    rendered.suppressed.len()
                );
                formatter.format_slide(&source, position, &rendered)?;
            }

            progress.deck_completed(&source);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    /// Apply command-line overrides on top of the configured options
    fn render_options(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(language) = self.language {
            options.language = language.into();
        }
        if self.translate {
            options.show_translation = true;
        }
        if self.no_highlight {
            options.highlight = false;
        }
        if self.hide_header {
            options.hide_header = true;
        }
        options
    }

    /// Slides to render with their 1-based positions
    fn selected_slides<'a>(&self, source: &str, deck: &'a Deck) -> Result<Vec<(usize, &'a Slide)>> {
        match self.slide {
            None => Ok(deck.slides.iter().enumerate().map(|(i, s)| (i + 1, s)).collect()),
            Some(position) => {
                let slide = position
                    .checked_sub(1)
                    .and_then(|index| deck.slides.get(index))
                    .ok_or_else(|| CliError::SlideNotFound {
                        source: source.to_string(),
                        requested: position,
                        available: deck.len(),
                    })?;
                Ok(vec![(position, slide)])
            }
        }
    }
}
