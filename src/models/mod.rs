pub mod character;
pub mod graph;
pub mod utterance;

pub use character::CharacterRecord;
pub use graph::{CharacterPair, InteractionEdge, MovieGraph};
pub use utterance::{JoinedUtterance, UtteranceRecord};

/// Movie graphs keyed by movie id, in order of first appearance.
pub type MovieGraphs = indexmap::IndexMap<String, MovieGraph>;
