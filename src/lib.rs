pub mod cli;
pub mod error;
pub mod ingest;
pub mod init;
pub mod models;
pub mod services;

pub use error::CinegraphError;
pub use models::{MovieGraph, MovieGraphs};
pub use services::build_movie_interaction_graphs;
