//! `cinegraph summary`: node and edge counts per movie.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{
    markdown_table, output_json, print_header, print_hint, print_kv, print_table, OutputMode,
};
use crate::init::AppContext;
use crate::services::{BuildReport, InteractionGraphs};

/// Summary line for one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSummary {
    pub movie_idx: String,
    pub characters: usize,
    pub interactions: usize,
    pub total_weight: u64,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    movies: &'a [MovieSummary],
    report: &'a BuildReport,
}

pub fn summarize(result: &InteractionGraphs) -> Vec<MovieSummary> {
    result
        .graphs
        .values()
        .map(|g| MovieSummary {
            movie_idx: g.movie_idx().to_string(),
            characters: g.node_count(),
            interactions: g.edge_count(),
            total_weight: g.total_interactions(),
        })
        .collect()
}

/// Reference line format: `Movie <id>: <n> characters, <m> interactions`.
pub fn summary_line(summary: &MovieSummary) -> String {
    format!(
        "Movie {}: {} characters, {} interactions",
        summary.movie_idx, summary.characters, summary.interactions
    )
}

pub fn handle_summary(ctx: &AppContext, mode: OutputMode) -> Result<()> {
    let result = ctx.build_graphs()?;
    let summaries = summarize(&result);

    match mode {
        OutputMode::Json => output_json(&SummaryOutput {
            movies: &summaries,
            report: &result.report,
        }),
        OutputMode::Plain => {
            for summary in &summaries {
                println!("{}", summary_line(summary));
            }
        }
        OutputMode::Markdown => {
            print!("{}", markdown_table(&HEADERS, &rows(&summaries)));
        }
        OutputMode::Human => {
            print_table(&HEADERS, rows(&summaries));
            print_report(&result.report);
        }
    }

    Ok(())
}

const HEADERS: [&str; 4] = ["Movie", "Characters", "Interactions", "Exchanges"];

fn rows(summaries: &[MovieSummary]) -> Vec<Vec<String>> {
    summaries
        .iter()
        .map(|s| {
            vec![
                s.movie_idx.clone(),
                s.characters.to_string(),
                s.interactions.to_string(),
                s.total_weight.to_string(),
            ]
        })
        .collect()
}

fn print_report(report: &BuildReport) {
    print_header("Build report");
    print_kv("Movies", &report.movies.to_string());
    print_kv("Utterances read", &report.utterances_read.to_string());
    print_kv("Utterances used", &report.utterances_used.to_string());
    if report.unmatched_speaker > 0 {
        print_kv(
            "Unknown speakers",
            &format!(
                "{} ({} utterances skipped)",
                report.unknown_speakers, report.unmatched_speaker
            ),
        );
    }
    if report.incomplete_user > 0 {
        print_kv(
            "Incomplete user records",
            &format!("{} utterances skipped", report.incomplete_user),
        );
    }
    if report.duplicate_user_ids > 0 {
        print_kv("Duplicate user ids", &report.duplicate_user_ids.to_string());
    }
    if report.movies == 0 {
        print_hint("No movies found. Check --users/--utterances or cinegraph.toml.");
    }
}
