//! Shared graph structure for the path algorithms
//!
//! A directed adjacency list keyed by node identifier. Neighbor sets keep
//! insertion order so every enumeration over the graph is deterministic.

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// Node identifier (an airport code)
pub type NodeId = String;

/// Ordered sequence of nodes, source first
pub type Path = Vec<NodeId>;

/// Directed graph stored as an adjacency list.
///
/// Only nodes that are the source of at least one link get an entry. A node
/// that is only ever a destination has no outgoing set at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Outgoing links: source -> ordered, duplicate-free destinations
    outgoing: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a one-directional link from `source` to `destination`.
    ///
    /// Linking the same pair twice is a no-op and keeps the original
    /// neighbor position.
    pub fn link(&mut self, source: impl Into<NodeId>, destination: impl Into<NodeId>) {
        self.outgoing
            .entry(source.into())
            .or_default()
            .insert(destination.into());
    }

    /// Outgoing neighbors of `node` in insertion order
    pub fn neighbors(&self, node: &str) -> Vec<&str> {
        self.outgoing
            .get(node)
            .map(|adjacent| adjacent.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// True iff there is a link `source -> destination`
    pub fn is_directly_connected(&self, source: &str, destination: &str) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|adjacent| adjacent.contains(destination))
    }

    /// Every node with at least one outgoing link, sorted
    pub fn all_source_nodes(&self) -> BTreeSet<&str> {
        self.outgoing.keys().map(String::as_str).collect()
    }

    pub fn source_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of distinct links
    pub fn link_count(&self) -> usize {
        self.outgoing.values().map(IndexSet::len).sum()
    }
}
