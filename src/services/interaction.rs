//! Build a character interaction graph from an ordered speaker sequence.

use crate::models::MovieGraph;

/// Build the graph for one movie.
///
/// Every distinct name becomes a node. Each pair of consecutive, different
/// speakers adds one to the weight of their undirected edge.
pub fn build_movie_graph(movie_idx: &str, sequence: &[String]) -> MovieGraph {
    let mut graph = MovieGraph::new(movie_idx);

    for name in sequence {
        graph.add_node(name);
    }

    for pair in sequence.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev != curr {
            graph.record_interaction(prev, curr);
        }
    }

    tracing::debug!(
        movie = movie_idx,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built movie graph"
    );

    graph
}
