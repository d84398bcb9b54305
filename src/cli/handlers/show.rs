//! `cinegraph show <movie>`: the characters and weighted edges of one movie.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{
    markdown_table, output_json, print_header, print_hint, print_table, OutputMode,
};
use crate::init::AppContext;
use crate::models::{InteractionEdge, MovieGraph};

#[derive(Serialize)]
struct ShowOutput<'a> {
    movie_idx: &'a str,
    nodes: Vec<&'a str>,
    edges: &'a [InteractionEdge],
    total_edges: usize,
}

/// Heaviest edges of `graph`, at most `limit` of them.
pub fn top_edges(graph: &MovieGraph, limit: usize) -> Vec<InteractionEdge> {
    let mut edges = graph.edges_by_weight();
    edges.truncate(limit);
    edges
}

pub fn handle_show(ctx: &AppContext, movie: &str, limit: usize, mode: OutputMode) -> Result<()> {
    let result = ctx.build_graphs()?;
    let graph = result.get(movie)?;
    let edges = top_edges(graph, limit);

    let rows: Vec<Vec<String>> = edges
        .iter()
        .map(|e| vec![e.source.clone(), e.target.clone(), e.weight.to_string()])
        .collect();
    let headers = ["Character", "Character", "Weight"];

    match mode {
        OutputMode::Json => output_json(&ShowOutput {
            movie_idx: graph.movie_idx(),
            nodes: graph.nodes().collect(),
            edges: &edges,
            total_edges: graph.edge_count(),
        }),
        OutputMode::Plain => {
            for edge in &edges {
                println!("{}\t{}\t{}", edge.source, edge.target, edge.weight);
            }
        }
        OutputMode::Markdown => {
            println!("## Movie {}\n", graph.movie_idx());
            println!(
                "Characters: {}\n",
                graph.nodes().collect::<Vec<_>>().join(", ")
            );
            print!("{}", markdown_table(&headers, &rows));
        }
        OutputMode::Human => {
            print_header(&format!(
                "Movie {}: {} characters, {} interactions",
                graph.movie_idx(),
                graph.node_count(),
                graph.edge_count()
            ));
            println!("{}\n", graph.nodes().collect::<Vec<_>>().join(", "));
            print_table(&headers, rows);
            if graph.edge_count() > edges.len() {
                print_hint(&format!(
                    "Showing {} of {} interactions (use --limit for more).",
                    edges.len(),
                    graph.edge_count()
                ));
            }
        }
    }

    Ok(())
}
