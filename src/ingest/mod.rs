//! Input side: dataset configuration and CSV table loading.

pub mod config;
pub mod loader;

pub use config::{load_dataset_config, ColumnConfig, DatasetConfig, CONFIG_FILE_NAME};
pub use loader::{load_characters, load_utterances, read_characters, read_utterances};
