//! Test harness with a temporary data directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const USERS_FILE: &str = "movie_users.csv";
pub const UTTERANCES_FILE: &str = "movie_utterances.csv";

/// Temporary data directory holding the two input tables.
pub struct TestHarness {
    pub temp_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn users_path(&self) -> PathBuf {
        self.temp_path().join(USERS_FILE)
    }

    pub fn utterances_path(&self) -> PathBuf {
        self.temp_path().join(UTTERANCES_FILE)
    }

    /// Write a file inside the data directory verbatim.
    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn write_users(&self, csv: &str) -> PathBuf {
        self.write_raw(USERS_FILE, csv)
    }

    pub fn write_utterances(&self, csv: &str) -> PathBuf {
        self.write_raw(UTTERANCES_FILE, csv)
    }
}
