//! Test data builders for the users and utterances tables.
//!
//! Produces CSV text shaped like the movie dialogue corpus, with the extra
//! columns the loader is expected to ignore.

/// Builder for a users table.
#[derive(Default)]
pub struct UsersTableBuilder {
    rows: Vec<(String, String, String)>,
}

impl UsersTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user. An empty name or movie is written as an empty field.
    pub fn user(mut self, user_id: &str, character_name: &str, movie_idx: &str) -> Self {
        self.rows
            .push((user_id.into(), character_name.into(), movie_idx.into()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::from("user_id,character_name,movie_idx,movie_name,gender\n");
        for (user_id, name, movie) in self.rows {
            out.push_str(&format!("{user_id},{name},{movie},some film,?\n"));
        }
        out
    }
}

/// Builder for an utterances table; rows are emitted in call order.
#[derive(Default)]
pub struct UtterancesTableBuilder {
    speakers: Vec<String>,
}

impl UtterancesTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, speaker: &str) -> Self {
        self.speakers.push(speaker.into());
        self
    }

    pub fn lines(mut self, speakers: &[&str]) -> Self {
        self.speakers.extend(speakers.iter().map(|s| s.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::from("id,conversation_id,speaker,text\n");
        for (i, speaker) in self.speakers.iter().enumerate() {
            out.push_str(&format!("L{i},L0,{speaker},\"line {i}, spoken\"\n"));
        }
        out
    }
}
