//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use patente_core::{ItalianLine, RenderedSlide};
use std::io::Write;

/// Plain text formatter
///
/// Each slide opens with a `[source #n]` line and its titles. Bullet lines
/// are marked with `•`, translation cards are indented under their block.
/// Italian text is written as rendered, highlight markup included.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_slide(&mut self, source: &str, position: usize, slide: &RenderedSlide) -> Result<()> {
        writeln!(self.writer, "[{source} #{position}]")?;
        if let Some(header) = &slide.header {
            for title in [&header.title_it, &header.title_fa].into_iter().flatten() {
                writeln!(self.writer, "{title}")?;
            }
        }

        for block in &slide.blocks {
            match &block.italian {
                ItalianLine::None => {}
                ItalianLine::Paragraph(text) => writeln!(self.writer, "{text}")?,
                ItalianLine::Bullet(lines) => {
                    for (i, line) in lines.iter().enumerate() {
                        let mark = if i == 0 { "•" } else { " " };
                        writeln!(self.writer, "{mark} {line}")?;
                    }
                }
            }
            if let Some(card) = &block.translation {
                writeln!(self.writer, "    » {}", card.text)?;
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
