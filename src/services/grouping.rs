//! Partition joined utterances into per-movie speaker sequences.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::JoinedUtterance;

/// Ordered character-name sequence per movie, movies in first-seen order.
pub type MovieSequences = IndexMap<String, Vec<String>>;

/// What the grouper kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingStats {
    /// Rows placed into a movie sequence.
    pub used: usize,
    /// Rows whose speaker has no user record.
    pub unmatched_speaker: usize,
    /// Distinct speaker ids among `unmatched_speaker`.
    pub unknown_speakers: usize,
    /// Rows whose user record lacks a character name or a movie.
    pub incomplete_user: usize,
}

/// Group rows by movie, keeping their relative order.
///
/// Rows without a resolved character name or movie are dropped, so the
/// utterances on either side of a dropped row become adjacent.
pub fn group_by_movie(joined: &[JoinedUtterance]) -> (MovieSequences, GroupingStats) {
    let mut sequences = MovieSequences::new();
    let mut stats = GroupingStats::default();
    let mut unknown: HashSet<&str> = HashSet::new();

    for row in joined {
        if !row.matched {
            stats.unmatched_speaker += 1;
            unknown.insert(row.speaker.as_str());
            continue;
        }
        let (Some(movie), Some(name)) = (&row.movie_idx, &row.character_name) else {
            stats.incomplete_user += 1;
            continue;
        };

        sequences.entry(movie.clone()).or_default().push(name.clone());
        stats.used += 1;
    }

    stats.unknown_speakers = unknown.len();
    (sequences, stats)
}
