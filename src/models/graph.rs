//! Per-movie character interaction graph.
//!
//! Nodes are character names; an undirected edge between two distinct
//! characters carries the number of times they spoke back to back.

use indexmap::{IndexMap, IndexSet};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Unordered pair of distinct character names.
///
/// The names are stored in lexicographic order, so `{A,B}` and `{B,A}`
/// compare and hash the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterPair {
    first: String,
    second: String,
}

impl CharacterPair {
    /// Returns `None` for a self pair.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The member of the pair that is not `name`, if `name` is a member.
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }
}

/// A weighted edge as exposed to callers and serializers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Undirected weighted graph of character interactions for one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieGraph {
    movie_idx: String,
    nodes: IndexSet<String>,
    weights: IndexMap<CharacterPair, u32>,
}

impl MovieGraph {
    pub fn new(movie_idx: impl Into<String>) -> Self {
        Self {
            movie_idx: movie_idx.into(),
            nodes: IndexSet::new(),
            weights: IndexMap::new(),
        }
    }

    pub fn movie_idx(&self) -> &str {
        &self.movie_idx
    }

    /// Add a character. Returns false if it was already present.
    pub fn add_node(&mut self, name: &str) -> bool {
        if self.nodes.contains(name) {
            return false;
        }
        self.nodes.insert(name.to_string())
    }

    /// Count one interaction between `a` and `b`, adding both as nodes.
    /// A self pair is ignored and returns false.
    pub fn record_interaction(&mut self, a: &str, b: &str) -> bool {
        let Some(pair) = CharacterPair::new(a, b) else {
            return false;
        };
        self.add_node(a);
        self.add_node(b);
        *self.weights.entry(pair).or_insert(0) += 1;
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    /// Character names in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.as_str())
    }

    /// Edges in the order their pair was first seen.
    pub fn edges(&self) -> impl Iterator<Item = (&CharacterPair, u32)> {
        self.weights.iter().map(|(pair, w)| (pair, *w))
    }

    /// Weight of the edge between `a` and `b`; 0 when there is none.
    pub fn weight(&self, a: &str, b: &str) -> u32 {
        CharacterPair::new(a, b)
            .and_then(|pair| self.weights.get(&pair).copied())
            .unwrap_or(0)
    }

    /// Sum of all edge weights: the number of speaker changes counted.
    pub fn total_interactions(&self) -> u64 {
        self.weights.values().map(|w| u64::from(*w)).sum()
    }

    /// Edges sorted heaviest first, ties broken by pair order.
    pub fn edges_by_weight(&self) -> Vec<InteractionEdge> {
        let mut edges: Vec<(&CharacterPair, u32)> = self.edges().collect();
        edges.sort_by(|(pa, wa), (pb, wb)| wb.cmp(wa).then_with(|| pa.cmp(pb)));
        edges
            .into_iter()
            .map(|(pair, weight)| to_edge(pair, weight))
            .collect()
    }

    /// Characters adjacent to `name`, heaviest first.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, u32)> {
        let mut out: Vec<(&str, u32)> = self
            .weights
            .iter()
            .filter_map(|(pair, w)| pair.other(name).map(|o| (o, *w)))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }

    pub fn interaction_edges(&self) -> Vec<InteractionEdge> {
        self.edges()
            .map(|(pair, weight)| to_edge(pair, weight))
            .collect()
    }
}

fn to_edge(pair: &CharacterPair, weight: u32) -> InteractionEdge {
    InteractionEdge {
        source: pair.first().to_string(),
        target: pair.second().to_string(),
        weight,
    }
}

impl Serialize for MovieGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MovieGraph", 3)?;
        state.serialize_field("movie_idx", &self.movie_idx)?;
        state.serialize_field("nodes", &self.nodes)?;
        state.serialize_field("edges", &self.interaction_edges())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(
            CharacterPair::new("Bob", "Alice"),
            CharacterPair::new("Alice", "Bob")
        );
        let pair = CharacterPair::new("Bob", "Alice").unwrap();
        assert_eq!(pair.first(), "Alice");
        assert_eq!(pair.second(), "Bob");
    }

    #[test]
    fn test_pair_rejects_self() {
        assert!(CharacterPair::new("Carol", "Carol").is_none());
    }

    #[test]
    fn test_pair_other() {
        let pair = CharacterPair::new("Alice", "Bob").unwrap();
        assert_eq!(pair.other("Alice"), Some("Bob"));
        assert_eq!(pair.other("Bob"), Some("Alice"));
        assert_eq!(pair.other("Carol"), None);
        assert!(pair.contains("Bob"));
    }

    #[test]
    fn test_record_interaction_is_symmetric() {
        let mut graph = MovieGraph::new("m0");
        assert!(graph.record_interaction("Alice", "Bob"));
        assert!(graph.record_interaction("Bob", "Alice"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("Alice", "Bob"), 2);
        assert_eq!(graph.weight("Bob", "Alice"), 2);
        assert_eq!(graph.total_interactions(), 2);
    }

    #[test]
    fn test_self_interaction_ignored() {
        let mut graph = MovieGraph::new("m0");
        assert!(!graph.record_interaction("Carol", "Carol"));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.weight("Carol", "Carol"), 0);
    }

    #[test]
    fn test_add_node_dedupes() {
        let mut graph = MovieGraph::new("m0");
        assert!(graph.add_node("Alice"));
        assert!(!graph.add_node("Alice"));
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("Alice"));
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_edges_by_weight_ordering() {
        let mut graph = MovieGraph::new("m0");
        graph.record_interaction("Carol", "Bob");
        graph.record_interaction("Alice", "Carol");
        graph.record_interaction("Alice", "Bob");
        graph.record_interaction("Bob", "Alice");

        let edges = graph.edges_by_weight();
        let flat: Vec<(&str, &str, u32)> = edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), e.weight))
            .collect();
        assert_eq!(
            flat,
            vec![("Alice", "Bob", 2), ("Alice", "Carol", 1), ("Bob", "Carol", 1)]
        );
    }

    #[test]
    fn test_neighbors() {
        let mut graph = MovieGraph::new("m0");
        graph.record_interaction("Alice", "Bob");
        graph.record_interaction("Alice", "Bob");
        graph.record_interaction("Alice", "Carol");
        graph.record_interaction("Bob", "Carol");

        assert_eq!(graph.neighbors("Alice"), vec![("Bob", 2), ("Carol", 1)]);
        assert!(graph.neighbors("Dave").is_empty());
    }

    #[test]
    fn test_serialize_shape() {
        let mut graph = MovieGraph::new("m7");
        graph.add_node("Solo");
        graph.record_interaction("Bob", "Alice");

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["movie_idx"], "m7");
        assert_eq!(value["nodes"], serde_json::json!(["Solo", "Bob", "Alice"]));
        assert_eq!(
            value["edges"],
            serde_json::json!([{"source": "Alice", "target": "Bob", "weight": 1}])
        );
    }
}
