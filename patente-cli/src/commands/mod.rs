//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use patente_core::TranslationLanguage;

use crate::output::OutputFormat;

pub mod check;
pub mod generate_config;
pub mod render;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render slide decks into aligned display blocks
    Render(render::RenderArgs),

    /// Report translation coverage of slide decks
    Check(check::CheckArgs),

    /// Write a preferences template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available translation languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Render(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available translation languages:");
                for language in [TranslationLanguage::Fa, TranslationLanguage::En] {
                    println!("  {:<4}{}", language.code(), language.name());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10}{}", format.name(), format.description());
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let env = env_logger::Env::default().default_filter_or(log_level);
        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
