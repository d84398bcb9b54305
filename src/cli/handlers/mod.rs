//! CLI command handlers.

pub mod export;
pub mod show;
pub mod summary;
