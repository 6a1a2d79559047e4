//! Rosa CLI - site content tools.
//!
//! Provides commands for:
//! - `nav`: Project a content tree JSON document onto its navigation tree
//! - `srcset`: Build the responsive `srcset` value for an image URL

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, SrcsetArgs};
use output::Output;

/// Rosa - site content tools.
#[derive(Parser)]
#[command(name = "rosa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a content tree onto its navigation tree.
    Nav(NavArgs),
    /// Build a responsive srcset for an image.
    Srcset(SrcsetArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Nav(args) => args.verbose,
            Self::Srcset(args) => args.verbose,
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
        Commands::Nav(args) => args.execute(),
        Commands::Srcset(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
