//! docnav CLI - documentation site navigation resolver.
//!
//! Provides commands for:
//! - `check`: Resolve the site configuration and report diagnostics
//! - `dump`: Print the resolved navigation tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs};
use output::Output;

/// docnav - documentation site navigation resolver.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration and report diagnostics.
    Check(CheckArgs),
    /// Print the resolved navigation tree as JSON.
    Dump(DumpArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.verbose,
            Self::Dump(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Dump(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
