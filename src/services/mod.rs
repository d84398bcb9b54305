pub mod export;
pub mod grouping;
pub mod interaction;
pub mod join;
pub mod pipeline;

pub use export::{write_graphs, ExportFormat};
pub use grouping::{group_by_movie, GroupingStats, MovieSequences};
pub use interaction::build_movie_graph;
pub use join::{join_utterances, CharacterIndex};
pub use pipeline::{
    build_graphs, build_movie_interaction_graphs, BuildReport, CsvDialogueSource,
    DialogueSource, InteractionGraphService, InteractionGraphs,
};
