//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use patente_core::RenderedSlide;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs rendered slides as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    slides: Vec<SlideRecord>,
}

/// One rendered slide with its origin
#[derive(Debug, Serialize)]
pub struct SlideRecord {
    /// Deck the slide came from
    pub source: String,
    /// 1-based slide number within the deck
    pub position: usize,
    /// Rendered content
    #[serde(flatten)]
    pub slide: RenderedSlide,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            slides: Vec::new(),
        }
    }

    /// Choose between indented and compact output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_slide(&mut self, source: &str, position: usize, slide: &RenderedSlide) -> Result<()> {
        self.slides.push(SlideRecord {
            source: source.to_string(),
            position,
            slide: slide.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.slides)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.slides)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
