//! `patente`: render and check bilingual driving-theory slide decks

use anyhow::Result;
use clap::Parser;
use patente_cli::commands::Commands;

/// Render bilingual slide decks and check their translation coverage
#[derive(Debug, Parser)]
#[command(name = "patente", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
