//! Shared initialization logic for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::ingest::{load_dataset_config, DatasetConfig};
use crate::services::{CsvDialogueSource, InteractionGraphService, InteractionGraphs};

/// Environment variable naming the data directory.
pub const DATA_PATH_ENV: &str = "CINEGRAPH_DATA_PATH";

/// Application context: where the inputs live and how to read them.
pub struct AppContext {
    pub data_path: PathBuf,
    pub config: DatasetConfig,
    pub source: CsvDialogueSource,
}

impl AppContext {
    /// Initialize application context.
    ///
    /// Data path priority: explicit path > CINEGRAPH_DATA_PATH env > current directory.
    /// Input files: explicit override > `cinegraph.toml` in the data path > defaults.
    pub fn new(
        explicit_path: Option<PathBuf>,
        users: Option<PathBuf>,
        utterances: Option<PathBuf>,
    ) -> Result<Self> {
        let data_path = explicit_path
            .or_else(|| std::env::var(DATA_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::info!("Using data path: {}", data_path.display());

        let config = load_dataset_config(&data_path);
        // Reject a bad delimiter before any file is opened.
        config.delimiter_byte()?;

        let source = match (users, utterances) {
            (None, None) => CsvDialogueSource::from_data_path(&data_path, config.clone()),
            (users, utterances) => CsvDialogueSource::new(
                users.unwrap_or_else(|| config.users_path(&data_path)),
                utterances.unwrap_or_else(|| config.utterances_path(&data_path)),
                config.clone(),
            ),
        };

        Ok(Self {
            data_path,
            config,
            source,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load both tables and build every movie graph.
    pub fn build_graphs(&self) -> Result<InteractionGraphs> {
        tracing::info!(
            "Reading users from {} and utterances from {}",
            self.source.users_path().display(),
            self.source.utterances_path().display()
        );
        let service = InteractionGraphService::new(self.source.clone());
        Ok(service.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(
            Some(dir.path().to_path_buf()),
            Some(PathBuf::from("/tmp/u.csv")),
            None,
        )
        .unwrap();

        assert_eq!(ctx.source.users_path(), Path::new("/tmp/u.csv"));
        assert_eq!(
            ctx.source.utterances_path(),
            dir.path().join("movie_utterances.csv")
        );
    }

    #[test]
    fn test_config_file_names_are_resolved_in_data_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cinegraph.toml"),
            "users_file = \"characters.csv\"\n",
        )
        .unwrap();

        let ctx = AppContext::new(Some(dir.path().to_path_buf()), None, None).unwrap();
        assert_eq!(ctx.source.users_path(), dir.path().join("characters.csv"));
        assert_eq!(ctx.data_path(), dir.path());
    }

    #[test]
    fn test_default_files_live_in_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(Some(dir.path().to_path_buf()), None, None).unwrap();

        assert_eq!(ctx.source.users_path(), dir.path().join("movie_users.csv"));
        assert_eq!(
            ctx.source.utterances_path(),
            dir.path().join("movie_utterances.csv")
        );
    }
}
