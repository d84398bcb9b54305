//! `cinegraph export`: write every movie graph to a file or stdout.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::print_success;
use crate::init::AppContext;
use crate::services::{write_graphs, ExportFormat};

pub fn handle_export(ctx: &AppContext, output: Option<&Path>, format: ExportFormat) -> Result<()> {
    let result = ctx.build_graphs()?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_graphs(&result.graphs, format, BufWriter::new(file))?;
            print_success(&format!(
                "Exported {} movie graphs to {}",
                result.graphs.len(),
                path.display()
            ));
        }
        None => {
            let stdout = std::io::stdout();
            write_graphs(&result.graphs, format, stdout.lock())?;
        }
    }

    Ok(())
}
