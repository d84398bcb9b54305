//! cinegraph - Character interaction networks from movie dialogue
//!
//! Usage:
//!   cinegraph summary                 Characters and interactions per movie
//!   cinegraph show m0                 Weighted interactions of one movie
//!   cinegraph export --format csv     Edge list of every movie
//!   cinegraph --help                  Show all commands

use anyhow::Result;
use clap::Parser;

use cinegraph::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr so stdout stays clean for exports
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cinegraph=info".parse()?),
        )
        .init();

    cinegraph::cli::run(&cli)?;

    Ok(())
}
