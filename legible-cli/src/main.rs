//! Legible command-line interface

use anyhow::Result;
use clap::Parser;
use legible_cli::commands::Commands;

/// Text readability analysis: statistics, Flesch scores and spelling correction
#[derive(Debug, Parser)]
#[command(name = "legible", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
