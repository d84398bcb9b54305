use serde::{Deserialize, Serialize};

/// A row of the users table: which character a speaker id stands for, and
/// in which movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub user_id: String,
    /// Empty in the source table means the name is unknown.
    pub character_name: Option<String>,
    pub movie_idx: Option<String>,
}

impl CharacterRecord {
    pub fn new(
        user_id: impl Into<String>,
        character_name: impl Into<String>,
        movie_idx: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            character_name: Some(character_name.into()),
            movie_idx: Some(movie_idx.into()),
        }
    }
}
