//! End-to-end construction of movie interaction graphs.
//!
//! Runs load → join → group → build. The data source is behind the
//! [`DialogueSource`] trait so the pipeline can be driven from CSV files or
//! from records already in memory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::ingest::{load_characters, load_utterances, DatasetConfig};
use crate::models::{CharacterRecord, MovieGraph, MovieGraphs, UtteranceRecord};
use crate::services::grouping::group_by_movie;
use crate::services::interaction::build_movie_graph;
use crate::services::join::{join_utterances, CharacterIndex};
use crate::CinegraphError;

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub utterances_read: usize,
    pub utterances_used: usize,
    /// Utterances dropped because their speaker has no user record.
    pub unmatched_speaker: usize,
    /// Distinct speaker ids behind `unmatched_speaker`.
    pub unknown_speakers: usize,
    /// Utterances dropped because the user record lacks a name or movie.
    pub incomplete_user: usize,
    pub duplicate_user_ids: usize,
    pub movies: usize,
}

/// Graphs plus the report of how they were built.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionGraphs {
    pub graphs: MovieGraphs,
    pub report: BuildReport,
}

impl InteractionGraphs {
    pub fn get(&self, movie_idx: &str) -> Result<&MovieGraph, CinegraphError> {
        self.graphs
            .get(movie_idx)
            .ok_or_else(|| CinegraphError::NotFound {
                entity_type: "movie".to_string(),
                id: movie_idx.to_string(),
            })
    }
}

/// Build one graph per movie from in-memory tables.
pub fn build_graphs(
    users: &[CharacterRecord],
    utterances: &[UtteranceRecord],
) -> InteractionGraphs {
    let index = CharacterIndex::build(users);
    let joined = join_utterances(&index, utterances);
    let (sequences, stats) = group_by_movie(&joined);

    if stats.unmatched_speaker > 0 {
        warn!(
            "Skipped {} utterances from {} speakers with no user record",
            stats.unmatched_speaker, stats.unknown_speakers
        );
    }
    if stats.incomplete_user > 0 {
        warn!(
            "Skipped {} utterances whose user record has no character name or movie",
            stats.incomplete_user
        );
    }

    let graphs: MovieGraphs = sequences
        .iter()
        .map(|(movie, sequence)| (movie.clone(), build_movie_graph(movie, sequence)))
        .collect();

    let report = BuildReport {
        utterances_read: utterances.len(),
        utterances_used: stats.used,
        unmatched_speaker: stats.unmatched_speaker,
        unknown_speakers: stats.unknown_speakers,
        incomplete_user: stats.incomplete_user,
        duplicate_user_ids: index.duplicates(),
        movies: graphs.len(),
    };

    info!(
        "Built {} movie graphs from {} of {} utterances",
        report.movies, report.utterances_used, report.utterances_read
    );

    InteractionGraphs { graphs, report }
}

/// Build movie graphs from two CSV files with the default column layout.
pub fn build_movie_interaction_graphs(
    users_csv: impl AsRef<Path>,
    utterances_csv: impl AsRef<Path>,
) -> Result<MovieGraphs, CinegraphError> {
    let source = CsvDialogueSource::new(
        users_csv.as_ref(),
        utterances_csv.as_ref(),
        DatasetConfig::default(),
    );
    Ok(InteractionGraphService::new(source).build()?.graphs)
}

// ---------------------------------------------------------------------------
// Data source trait
// ---------------------------------------------------------------------------

/// Data access abstraction for the graph pipeline.
pub trait DialogueSource {
    fn characters(&self) -> Result<Vec<CharacterRecord>, CinegraphError>;
    /// Utterances in conversational order.
    fn utterances(&self) -> Result<Vec<UtteranceRecord>, CinegraphError>;
}

/// CSV-file implementation of DialogueSource.
#[derive(Debug, Clone)]
pub struct CsvDialogueSource {
    users_path: PathBuf,
    utterances_path: PathBuf,
    config: DatasetConfig,
}

impl CsvDialogueSource {
    pub fn new(
        users_path: impl Into<PathBuf>,
        utterances_path: impl Into<PathBuf>,
        config: DatasetConfig,
    ) -> Self {
        Self {
            users_path: users_path.into(),
            utterances_path: utterances_path.into(),
            config,
        }
    }

    /// Resolve both files inside `data_path` according to `config`.
    pub fn from_data_path(data_path: &Path, config: DatasetConfig) -> Self {
        Self::new(
            config.users_path(data_path),
            config.utterances_path(data_path),
            config,
        )
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    pub fn utterances_path(&self) -> &Path {
        &self.utterances_path
    }
}

impl DialogueSource for CsvDialogueSource {
    fn characters(&self) -> Result<Vec<CharacterRecord>, CinegraphError> {
        load_characters(&self.users_path, &self.config)
    }

    fn utterances(&self) -> Result<Vec<UtteranceRecord>, CinegraphError> {
        load_utterances(&self.utterances_path, &self.config)
    }
}

// ---------------------------------------------------------------------------
// InteractionGraphService
// ---------------------------------------------------------------------------

/// Service building interaction graphs from a dialogue source.
pub struct InteractionGraphService<S> {
    source: S,
}

impl<S: DialogueSource> InteractionGraphService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn build(&self) -> Result<InteractionGraphs, CinegraphError> {
        let users = self.source.characters()?;
        let utterances = self.source.utterances()?;
        Ok(build_graphs(&users, &utterances))
    }
}
