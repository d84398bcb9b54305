use serde::{Deserialize, Serialize};

/// A row of the utterances table. Only the speaker matters for graph
/// construction; the id is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceRecord {
    pub id: Option<String>,
    pub speaker: String,
}

impl UtteranceRecord {
    pub fn new(speaker: impl Into<String>) -> Self {
        Self {
            id: None,
            speaker: speaker.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, speaker: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            speaker: speaker.into(),
        }
    }
}

/// An utterance after the speaker lookup. `matched` is false and both
/// optional fields are `None` when the speaker has no user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedUtterance {
    pub speaker: String,
    pub matched: bool,
    pub character_name: Option<String>,
    pub movie_idx: Option<String>,
}
