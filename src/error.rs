use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for cinegraph operations.
#[derive(Debug, Error)]
pub enum CinegraphError {
    /// Input file missing or unreadable.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed (wrong field count, bad encoding).
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A required column is absent from the header row.
    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// Configuration value rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested entity was not found.
    #[error("Not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Rendering output failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CinegraphError {
    /// Classify a `csv::Error` raised while reading `path`.
    pub fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        if err.is_io_error() {
            if let csv::ErrorKind::Io(source) = err.into_kind() {
                return CinegraphError::Io { path, source };
            }
            return CinegraphError::Parse {
                path,
                message: "unclassified I/O failure".to_string(),
            };
        }
        CinegraphError::Parse {
            path,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CinegraphError {
    fn from(err: serde_json::Error) -> Self {
        CinegraphError::Serialization(format!("JSON serialization error: {}", err))
    }
}
