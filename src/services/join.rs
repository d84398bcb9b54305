//! Speaker lookup: left join of utterances onto the users table.

use std::collections::HashMap;

use crate::models::{CharacterRecord, JoinedUtterance, UtteranceRecord};

/// Lookup from user id to its user record.
///
/// When a user id appears more than once, the first record wins.
#[derive(Debug, Default)]
pub struct CharacterIndex<'a> {
    by_user: HashMap<&'a str, &'a CharacterRecord>,
    duplicates: usize,
}

impl<'a> CharacterIndex<'a> {
    pub fn build(records: &'a [CharacterRecord]) -> Self {
        let mut by_user = HashMap::with_capacity(records.len());
        let mut duplicates = 0;

        for record in records {
            if record.user_id.is_empty() {
                continue;
            }
            if by_user.contains_key(record.user_id.as_str()) {
                duplicates += 1;
                continue;
            }
            by_user.insert(record.user_id.as_str(), record);
        }

        if duplicates > 0 {
            tracing::warn!(
                "{} duplicate user ids in users table; keeping first occurrence",
                duplicates
            );
        }

        Self {
            by_user,
            duplicates,
        }
    }

    pub fn lookup(&self, speaker: &str) -> Option<&'a CharacterRecord> {
        self.by_user.get(speaker).copied()
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }

    /// Number of user records ignored because their id was already taken.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Resolve one utterance. Unknown speakers keep every field empty.
    pub fn resolve(&self, utterance: &UtteranceRecord) -> JoinedUtterance {
        match self.lookup(&utterance.speaker) {
            Some(record) => JoinedUtterance {
                speaker: utterance.speaker.clone(),
                matched: true,
                character_name: record.character_name.clone(),
                movie_idx: record.movie_idx.clone(),
            },
            None => JoinedUtterance {
                speaker: utterance.speaker.clone(),
                matched: false,
                character_name: None,
                movie_idx: None,
            },
        }
    }
}

/// Join every utterance against the index, one output row per input row.
pub fn join_utterances(
    index: &CharacterIndex<'_>,
    utterances: &[UtteranceRecord],
) -> Vec<JoinedUtterance> {
    utterances.iter().map(|u| index.resolve(u)).collect()
}
