//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use patente_core::{ItalianLine, RenderedSlide};
use std::io::Write;

/// Markdown formatter - one section per slide, translation cards as quotes
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    slide_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            slide_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_slide(&mut self, source: &str, position: usize, slide: &RenderedSlide) -> Result<()> {
        self.slide_count += 1;

        let title = slide
            .header
            .as_ref()
            .and_then(|header| header.title_it.as_deref())
            .unwrap_or("Slide");
        writeln!(self.writer, "## {title} ({source} #{position})")?;
        if let Some(title_fa) = slide.header.as_ref().and_then(|h| h.title_fa.as_deref()) {
            writeln!(self.writer, "*{title_fa}*")?;
        }
        writeln!(self.writer)?;

        for block in &slide.blocks {
            match &block.italian {
                ItalianLine::None => {}
                ItalianLine::Paragraph(text) => {
                    writeln!(self.writer, "{text}")?;
                    writeln!(self.writer)?;
                }
                ItalianLine::Bullet(lines) => {
                    writeln!(self.writer, "- {}", lines.join("<br>"))?;
                }
            }
            if let Some(card) = &block.translation {
                let indent = if block.class.is_bullet() { "  " } else { "" };
                writeln!(self.writer, "{indent}> {}", card.text)?;
                writeln!(self.writer)?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total slides: {}*", self.slide_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
