//! Connection graph
//!
//! This module turns the textual connections table into the structures every
//! query runs against:
//! - Pest grammar and parser for `Connections:` lines
//! - Dense code/index mapping and symmetric price table
//! - Directed adjacency graph (from `farepath-graph-algorithms`)

pub mod index;
pub mod parser;
pub mod types;

// Re-export main types
pub use farepath_graph_algorithms::{stop_count, AdjacencyGraph, NodeId, Path};
pub use index::{LookupError, LookupResult, WeightedGraphIndex};
pub use parser::{parse_connections, strip_whitespace, ParseError, ParseResult};
pub use types::{ConnectionRecord, Price};
