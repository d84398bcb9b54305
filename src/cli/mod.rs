//! CLI interface for cinegraph.

pub mod handlers;
pub mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

use crate::init::AppContext;
use crate::services::ExportFormat;
use output::OutputMode;

/// cinegraph - Character interaction networks from movie dialogue
#[derive(Parser)]
#[command(name = "cinegraph", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the input tables and cinegraph.toml (default: .)
    #[arg(long, env = "CINEGRAPH_DATA_PATH", global = true)]
    pub data_path: Option<PathBuf>,

    /// Users table (overrides the data directory lookup)
    #[arg(long, global = true)]
    pub users: Option<PathBuf>,

    /// Utterances table (overrides the data directory lookup)
    #[arg(long, global = true)]
    pub utterances: Option<PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as Markdown
    #[arg(long, global = true)]
    pub md: bool,

    /// Plain line-per-item output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-movie character and interaction counts
    Summary,

    /// Characters and weighted interactions of one movie
    Show {
        /// Movie id (e.g. m0)
        movie: String,
        /// Maximum edges listed
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Write all graphs as JSON or as a CSV edge list
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, elvish, powershell)
        shell: Shell,
    },
}

/// Run a parsed command line. Completions are written before the data
/// directory or its cinegraph.toml is read.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        write_completions(*shell, &mut std::io::stdout());
        return Ok(());
    }

    let mode = OutputMode::from_flags(cli.json, cli.md, cli.plain);
    let ctx = AppContext::new(
        cli.data_path.clone(),
        cli.users.clone(),
        cli.utterances.clone(),
    )?;
    execute(&cli.command, &ctx, mode)
}

/// Write the completion script for `shell`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    clap_complete::generate(shell, &mut Cli::command(), "cinegraph", out);
}

/// Execute a CLI command.
pub fn execute(command: &Commands, ctx: &AppContext, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Commands::Summary => handlers::summary::handle_summary(ctx, mode)?,

        Commands::Show { movie, limit } => handlers::show::handle_show(ctx, movie, *limit, mode)?,

        Commands::Export { output, format } => {
            handlers::export::handle_export(ctx, output.as_deref(), *format)?
        }

        Commands::Completions { shell } => write_completions(*shell, &mut std::io::stdout()),
    }

    Ok(())
}
