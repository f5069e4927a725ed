//! palscan command-line entry point

use clap::Parser;
use palscan_cli::commands::Commands;

/// Find palindromes in text and files
#[derive(Debug, Parser)]
#[command(name = "palscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
