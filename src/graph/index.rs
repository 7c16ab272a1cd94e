//! Weighted graph index
//!
//! Turns a connections table into:
//! - a dense integer identity per airport code (first-appearance order)
//! - a symmetric N×N price table over those identities
//! - a directed adjacency graph used for path discovery
//!
//! A record `A-B-p` makes the price between A and B queryable in both
//! directions, but only the hop `A -> B` is traversable.

use super::parser::{parse_connections, ParseError, ParseResult};
use super::types::{ConnectionRecord, Price};
use farepath_graph_algorithms::AdjacencyGraph;
use indexmap::IndexSet;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Errors raised when a code or index is not part of the graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No entry for {0}/{1}")]
    UnknownPair(String, String),

    #[error("No entry for code '{0}'")]
    UnknownCode(String),

    #[error("No entry for index {0}")]
    UnknownIndex(usize),

    #[error("Total price of {0} exceeds the price range")]
    PriceOverflow(String),
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Immutable, queryable view of a connections table
#[derive(Debug, Clone)]
pub struct WeightedGraphIndex {
    /// Airport codes; a code's position is its row/column in `prices`
    codes: IndexSet<String>,
    /// Row-major price table, `codes.len()` squared
    prices: Vec<Price>,
    /// Directed connectivity
    graph: AdjacencyGraph,
    /// Parsed records in declaration order
    records: Vec<ConnectionRecord>,
}

impl WeightedGraphIndex {
    /// Build the index from a `Connections:` specification line
    pub fn parse(specification: &str) -> ParseResult<Self> {
        let records = parse_connections(specification)?;
        Self::from_records(records)
    }

    /// Build the index from records; every price must be greater than zero
    pub fn from_records(records: Vec<ConnectionRecord>) -> ParseResult<Self> {
        if let Some(record) = records.iter().find(|record| record.price == 0) {
            return Err(ParseError::NonPositivePrice {
                record: record.to_string(),
            });
        }

        let mut codes = IndexSet::new();
        for record in &records {
            codes.insert(record.source.clone());
            codes.insert(record.destination.clone());
        }

        let size = codes.len();
        let mut prices = vec![0; size * size];
        let mut graph = AdjacencyGraph::new();

        for record in &records {
            // Both codes were inserted above
            let (Some(x), Some(y)) = (
                codes.get_index_of(&record.source),
                codes.get_index_of(&record.destination),
            ) else {
                continue;
            };

            prices[x * size + y] = record.price;
            prices[y * size + x] = record.price;
            graph.link(record.source.as_str(), record.destination.as_str());
        }

        info!(
            "Indexed {} airports from {} connections ({} directed links)",
            size,
            records.len(),
            graph.link_count()
        );

        Ok(WeightedGraphIndex {
            codes,
            prices,
            graph,
            records,
        })
    }

    /// Raw price table read.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`WeightedGraphIndex::size`].
    pub fn price_by_index(&self, x: usize, y: usize) -> Price {
        let size = self.size();
        assert!(
            x < size && y < size,
            "price table index ({}, {}) out of bounds for size {}",
            x,
            y,
            size
        );
        self.prices[x * size + y]
    }

    /// Price between two airports, in either direction
    pub fn price_by_code(&self, a: &str, b: &str) -> LookupResult<Price> {
        match (self.codes.get_index_of(a), self.codes.get_index_of(b)) {
            (Some(x), Some(y)) => Ok(self.price_by_index(x, y)),
            _ => Err(LookupError::UnknownPair(a.to_string(), b.to_string())),
        }
    }

    /// Number of distinct airport codes
    pub fn size(&self) -> usize {
        self.codes.len()
    }

    pub fn index_of(&self, code: &str) -> LookupResult<usize> {
        self.codes
            .get_index_of(code)
            .ok_or_else(|| LookupError::UnknownCode(code.to_string()))
    }

    pub fn code_of(&self, index: usize) -> LookupResult<&str> {
        self.codes
            .get_index(index)
            .map(String::as_str)
            .ok_or(LookupError::UnknownIndex(index))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Directed connectivity graph for path enumeration
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn records(&self) -> &[ConnectionRecord] {
        &self.records
    }
}

impl FromStr for WeightedGraphIndex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
