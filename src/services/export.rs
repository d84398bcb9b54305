//! Render built graphs as JSON documents or CSV edge lists.

use std::io::Write;

use serde::Serialize;

use crate::models::MovieGraphs;
use crate::CinegraphError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// One JSON object per movie with nodes and weighted edges.
    #[default]
    Json,
    /// Flat edge list: movie_idx,source,target,weight.
    Csv,
}

/// One line of the CSV edge list.
#[derive(Debug, Serialize)]
struct EdgeRow<'a> {
    movie_idx: &'a str,
    source: &'a str,
    target: &'a str,
    weight: u32,
}

/// Write every graph to `writer` in the given format.
pub fn write_graphs<W: Write>(
    graphs: &MovieGraphs,
    format: ExportFormat,
    writer: W,
) -> Result<(), CinegraphError> {
    match format {
        ExportFormat::Json => write_json(graphs, writer),
        ExportFormat::Csv => write_csv(graphs, writer),
    }
}

fn write_json<W: Write>(graphs: &MovieGraphs, mut writer: W) -> Result<(), CinegraphError> {
    let movies: Vec<_> = graphs.values().collect();
    serde_json::to_writer_pretty(&mut writer, &movies)?;
    writeln!(writer).map_err(|e| CinegraphError::Serialization(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| CinegraphError::Serialization(e.to_string()))?;
    Ok(())
}

fn write_csv<W: Write>(graphs: &MovieGraphs, writer: W) -> Result<(), CinegraphError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for graph in graphs.values() {
        for (pair, weight) in graph.edges() {
            csv_writer
                .serialize(EdgeRow {
                    movie_idx: graph.movie_idx(),
                    source: pair.first(),
                    target: pair.second(),
                    weight,
                })
                .map_err(|e| CinegraphError::Serialization(e.to_string()))?;
        }
    }
    csv_writer
        .flush()
        .map_err(|e| CinegraphError::Serialization(e.to_string()))?;
    Ok(())
}
