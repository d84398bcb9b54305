//! CSV loading for the users and utterances tables.
//!
//! Columns are located by header name, so extra columns and any column
//! order are accepted. A ragged row or undecodable field aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::ingest::config::DatasetConfig;
use crate::models::{CharacterRecord, UtteranceRecord};
use crate::CinegraphError;

/// Read the users table from `path`.
pub fn load_characters(
    path: &Path,
    config: &DatasetConfig,
) -> Result<Vec<CharacterRecord>, CinegraphError> {
    let file = open(path)?;
    let records = read_characters(file, path, config)?;
    info!("Loaded {} user records from {}", records.len(), path.display());
    Ok(records)
}

/// Read the utterances table from `path`, preserving row order.
pub fn load_utterances(
    path: &Path,
    config: &DatasetConfig,
) -> Result<Vec<UtteranceRecord>, CinegraphError> {
    let file = open(path)?;
    let records = read_utterances(file, path, config)?;
    info!("Loaded {} utterances from {}", records.len(), path.display());
    Ok(records)
}

/// Read a users table from any reader. `origin` is only used in errors.
pub fn read_characters<R: Read>(
    reader: R,
    origin: &Path,
    config: &DatasetConfig,
) -> Result<Vec<CharacterRecord>, CinegraphError> {
    let mut csv_reader = build_reader(reader, config)?;
    let headers = csv_reader
        .headers()
        .map_err(|e| CinegraphError::from_csv(origin, e))?
        .clone();

    let columns = &config.columns;
    let user_idx = column_index(&headers, &columns.user_id, origin)?;
    let name_idx = column_index(&headers, &columns.character_name, origin)?;
    let movie_idx = column_index(&headers, &columns.movie_idx, origin)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| CinegraphError::from_csv(origin, e))?;
        records.push(CharacterRecord {
            user_id: row.get(user_idx).unwrap_or_default().to_string(),
            character_name: optional_field(&row, name_idx),
            movie_idx: optional_field(&row, movie_idx),
        });
    }
    Ok(records)
}

/// Read an utterances table from any reader. `origin` is only used in errors.
pub fn read_utterances<R: Read>(
    reader: R,
    origin: &Path,
    config: &DatasetConfig,
) -> Result<Vec<UtteranceRecord>, CinegraphError> {
    let mut csv_reader = build_reader(reader, config)?;
    let headers = csv_reader
        .headers()
        .map_err(|e| CinegraphError::from_csv(origin, e))?
        .clone();

    let speaker_idx = column_index(&headers, &config.columns.speaker, origin)?;
    let id_idx = headers
        .iter()
        .position(|h| h == config.columns.utterance_id);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| CinegraphError::from_csv(origin, e))?;
        records.push(UtteranceRecord {
            id: id_idx.and_then(|idx| optional_field(&row, idx)),
            speaker: row.get(speaker_idx).unwrap_or_default().to_string(),
        });
    }
    Ok(records)
}

fn open(path: &Path) -> Result<File, CinegraphError> {
    File::open(path).map_err(|source| CinegraphError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_reader<R: Read>(
    reader: R,
    config: &DatasetConfig,
) -> Result<csv::Reader<R>, CinegraphError> {
    Ok(ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader))
}

fn column_index(
    headers: &StringRecord,
    name: &str,
    origin: &Path,
) -> Result<usize, CinegraphError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CinegraphError::MissingColumn {
            path: origin.to_path_buf(),
            column: name.to_string(),
        })
}

/// Empty fields are treated as missing values.
fn optional_field(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("inline.csv")
    }

    #[test]
    fn test_read_characters_by_header_name() {
        let data = "movie_idx,gender,character_name,user_id\nm0,f,BIANCA,u0\nm0,?,,u1\n";
        let records =
            read_characters(data.as_bytes(), &origin(), &DatasetConfig::default()).unwrap();

        assert_eq!(
            records,
            vec![
                CharacterRecord::new("u0", "BIANCA", "m0"),
                CharacterRecord {
                    user_id: "u1".to_string(),
                    character_name: None,
                    movie_idx: Some("m0".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_read_utterances_keeps_order_and_optional_id() {
        let data = "id,speaker,text\nL1,u0,Hi\nL2,u1,\"Hello, you\"\nL3,u0,Bye\n";
        let records =
            read_utterances(data.as_bytes(), &origin(), &DatasetConfig::default()).unwrap();

        assert_eq!(
            records,
            vec![
                UtteranceRecord::with_id("L1", "u0"),
                UtteranceRecord::with_id("L2", "u1"),
                UtteranceRecord::with_id("L3", "u0"),
            ]
        );
    }

    #[test]
    fn test_read_utterances_without_id_column() {
        let data = "speaker\nu0\nu1\n";
        let records =
            read_utterances(data.as_bytes(), &origin(), &DatasetConfig::default()).unwrap();
        assert_eq!(records, vec![UtteranceRecord::new("u0"), UtteranceRecord::new("u1")]);
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let records =
            read_utterances("id,speaker\n".as_bytes(), &origin(), &DatasetConfig::default())
                .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let data = "user_id,character_name\nu0,BIANCA\n";
        let err = read_characters(data.as_bytes(), &origin(), &DatasetConfig::default())
            .unwrap_err();
        match err {
            CinegraphError::MissingColumn { column, .. } => assert_eq!(column, "movie_idx"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let data = "id,speaker\nL1,u0\nL2\n";
        let err = read_utterances(data.as_bytes(), &origin(), &DatasetConfig::default())
            .unwrap_err();
        assert!(matches!(err, CinegraphError::Parse { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let data: &[u8] = b"id,speaker\nL1,u\xff\n";
        let err = read_utterances(data, &origin(), &DatasetConfig::default()).unwrap_err();
        assert!(matches!(err, CinegraphError::Parse { .. }));
    }

    #[test]
    fn test_custom_delimiter_and_columns() {
        let mut config = DatasetConfig {
            delimiter: ';',
            ..Default::default()
        };
        config.columns.speaker = "who".to_string();

        let records = read_utterances("who;line\nu3;x\n".as_bytes(), &origin(), &config).unwrap();
        assert_eq!(records, vec![UtteranceRecord::new("u3")]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_utterances(&dir.path().join("nope.csv"), &DatasetConfig::default())
            .unwrap_err();
        assert!(matches!(err, CinegraphError::Io { .. }));
    }
}
