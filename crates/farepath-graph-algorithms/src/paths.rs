//! Exhaustive path enumeration
//!
//! Simple paths between two nodes, round trips through a node, and the
//! union of both with "continue through a loop at the destination" splices.
//!
//! The walk uses an explicit frame stack instead of recursion. Paths are
//! simple, so the stack never grows deeper than the node count; the number
//! of paths produced on a cyclic graph is not bounded.

use crate::common::{AdjacencyGraph, Path};
use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Number of intermediate nodes in a path
pub fn stop_count(path: &[impl AsRef<str>]) -> usize {
    path.len().saturating_sub(2)
}

/// One level of the depth-first walk
struct Frame<'g> {
    /// Snapshot of the entered node's neighbors
    neighbors: Vec<&'g str>,
    /// Next neighbor to consider
    cursor: usize,
}

impl AdjacencyGraph {
    /// Enumerate every simple path from `source` to `destination`.
    ///
    /// When a node is entered and `destination` is one of its neighbors, the
    /// completed path is emitted right away; the remaining neighbors are then
    /// extended in insertion order. The destination is never an intermediate
    /// hop. Returns nothing when `source == destination`; use
    /// [`AdjacencyGraph::round_trips`] for that case.
    pub fn simple_paths(&self, source: &str, destination: &str) -> Vec<Path> {
        let mut paths = Vec::new();
        if source == destination {
            return paths;
        }

        let mut prefix: Vec<&str> = vec![source];
        let mut on_path: FxHashSet<&str> = FxHashSet::default();
        on_path.insert(source);

        let mut stack = vec![self.enter(source, destination, &prefix, &mut paths)];

        while let Some(frame) = stack.last_mut() {
            let next = frame.neighbors[frame.cursor..]
                .iter()
                .position(|node| *node != destination && !on_path.contains(node));

            match next {
                Some(offset) => {
                    let node = frame.neighbors[frame.cursor + offset];
                    frame.cursor += offset + 1;

                    prefix.push(node);
                    on_path.insert(node);
                    let entered = self.enter(node, destination, &prefix, &mut paths);
                    stack.push(entered);
                }
                None => {
                    stack.pop();
                    if let Some(node) = prefix.pop() {
                        on_path.remove(node);
                    }
                }
            }
        }

        debug!(
            "Found {} simple paths from {} to {}",
            paths.len(),
            source,
            destination
        );
        paths
    }

    /// Push a frame for the last node of `prefix`, emitting the completed
    /// path first if `destination` is adjacent.
    fn enter(&self, node: &str, destination: &str, prefix: &[&str], paths: &mut Vec<Path>) -> Frame<'_> {
        let neighbors = self.neighbors(node);

        if neighbors.iter().any(|neighbor| *neighbor == destination) {
            let mut path: Path = prefix.iter().map(|code| code.to_string()).collect();
            path.push(destination.to_string());
            paths.push(path);
        }

        Frame { neighbors, cursor: 0 }
    }

    /// Enumerate closed tours that start and end at `origin`.
    ///
    /// Every other source node is tried as a midpoint: each simple path out
    /// to it is joined with each simple path back, sharing the midpoint once.
    /// Identical tours are kept once, in first-discovery order.
    pub fn round_trips(&self, origin: &str) -> Vec<Path> {
        let mut tours: IndexSet<Path> = IndexSet::new();

        for midpoint in self.all_source_nodes() {
            if midpoint == origin {
                continue;
            }

            let departures = self.simple_paths(origin, midpoint);
            if departures.is_empty() {
                continue;
            }
            let arrivals = self.simple_paths(midpoint, origin);

            for departure in &departures {
                for arrival in &arrivals {
                    let mut tour = departure.clone();
                    tour.extend(arrival.iter().skip(1).cloned());
                    tours.insert(tour);
                }
            }
        }

        debug!("Found {} round trips through {}", tours.len(), origin);
        tours.into_iter().collect()
    }

    /// Round trips when `source == destination`, simple paths otherwise
    pub fn depth_first(&self, source: &str, destination: &str) -> Vec<Path> {
        if source == destination {
            self.round_trips(source)
        } else {
            self.simple_paths(source, destination)
        }
    }

    /// [`AdjacencyGraph::depth_first`] plus every path extended by a round
    /// trip at the destination.
    ///
    /// Each base path is followed directly by its splices, so enumeration
    /// order stays depth-first.
    pub fn depth_first_all(&self, source: &str, destination: &str) -> Vec<Path> {
        let base = self.depth_first(source, destination);
        let extensions = self.round_trips(destination);

        let mut result = Vec::with_capacity(base.len() * (extensions.len() + 1));
        for path in base {
            let head = &path[..path.len() - 1];
            let splices: Vec<Path> = extensions
                .iter()
                .map(|round_trip| {
                    let mut spliced = head.to_vec();
                    spliced.extend(round_trip.iter().cloned());
                    spliced
                })
                .collect();

            result.push(path);
            result.extend(splices);
        }

        result
    }

    /// True iff `sequence` is exactly one of the paths enumerated by
    /// [`AdjacencyGraph::depth_first`] between its first and last node.
    pub fn path_matches(&self, sequence: &[impl AsRef<str>]) -> bool {
        if sequence.len() < 2 {
            return false;
        }
        let (Some(first), Some(last)) = (sequence.first(), sequence.last()) else {
            return false;
        };

        self.depth_first(first.as_ref(), last.as_ref())
            .iter()
            .any(|path| {
                path.len() == sequence.len()
                    && path.iter().zip(sequence).all(|(a, b)| a == b.as_ref())
            })
    }
}
