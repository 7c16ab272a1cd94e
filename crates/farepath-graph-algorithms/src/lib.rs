pub mod common;
pub mod paths;

pub use common::{AdjacencyGraph, NodeId, Path};
pub use paths::stop_count;
