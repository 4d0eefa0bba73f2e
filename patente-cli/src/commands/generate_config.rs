//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

/// Preferences template written by `generate-config`
pub const CONFIG_TEMPLATE: &str = r#"# Patente render preferences
#
# Command-line flags take precedence over the values below.

[display]
# Translation card language: "fa" or "en"
language = "fa"

# Mark the slide's highlight terms in the Italian text
highlight = true

# Show a translation card under each block
show_translation = false

# Omit the slide title header
hide_header = false

# Markup wrapped around highlighted terms
[display.marker]
open = '<span class="hl-it">'
close = "</span>"

[output]
# Default output format: "text", "json" or "markdown"
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            ))
            .into());
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Preferences template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   patente render -i <DECK> --config {}",
            self.output.display()
        );

        Ok(())
    }
}
