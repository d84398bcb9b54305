//! Dataset configuration.
//!
//! Describes where the two input tables live and how their columns are
//! named. Loaded from `{data_path}/cinegraph.toml` when present; every field
//! has a default matching the movie dialogue corpus layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CinegraphError;

/// File name looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "cinegraph.toml";

/// Column names of the two input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub user_id: String,
    pub character_name: String,
    pub movie_idx: String,
    pub speaker: String,
    /// Optional utterance id column, read when present.
    pub utterance_id: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            user_id: "user_id".to_string(),
            character_name: "character_name".to_string(),
            movie_idx: "movie_idx".to_string(),
            speaker: "speaker".to_string(),
            utterance_id: "id".to_string(),
        }
    }
}

/// Input locations and table layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Users table, relative to the data directory unless absolute.
    pub users_file: PathBuf,
    /// Utterances table, relative to the data directory unless absolute.
    pub utterances_file: PathBuf,
    pub delimiter: char,
    pub columns: ColumnConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("movie_users.csv"),
            utterances_file: PathBuf::from("movie_utterances.csv"),
            delimiter: ',',
            columns: ColumnConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Field delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, CinegraphError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CinegraphError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }

    pub fn users_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.users_file)
    }

    pub fn utterances_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.utterances_file)
    }
}

/// Load dataset config from `{data_path}/cinegraph.toml`, falling back to
/// defaults when the file is absent or unusable.
pub fn load_dataset_config(data_path: &Path) -> DatasetConfig {
    let config_path = data_path.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return DatasetConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(contents) => match toml::from_str::<DatasetConfig>(&contents) {
            Ok(config) => {
                info!("Loaded dataset config from {}", config_path.display());
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse {}: {}. Using default.",
                    config_path.display(),
                    e
                );
                DatasetConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                "Failed to read {}: {}. Using default.",
                config_path.display(),
                e
            );
            DatasetConfig::default()
        }
    }
}
