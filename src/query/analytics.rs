//! Path analytics over a weighted graph index
//!
//! Answers the four connection questions:
//! - price of an exact itinerary
//! - cheapest itinerary between two airports
//! - number of itineraries by stop count
//! - every itinerary below a price ceiling
//!
//! Every operation is total: unknown airports and unreachable destinations
//! come back as "not found" (`None`, zero, or an empty list), never as an
//! error.

use super::config::AnalyticsConfig;
use crate::graph::{stop_count, LookupError, LookupResult, Path, Price, WeightedGraphIndex};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Fixed answer for questions without a matching connection
pub const CONNECTION_NOT_FOUND: &str = "No such connection found!";

/// Separator between formatted itineraries
pub const LIST_SEPARATOR: &str = ", ";

/// How a path's stop count is compared against the requested number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopComparator {
    Minimum,
    Maximum,
    Exactly,
}

impl StopComparator {
    /// Match the question keyword (`minimum`, `maximum`, `exactly`), ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "minimum" => Some(StopComparator::Minimum),
            "maximum" => Some(StopComparator::Maximum),
            "exactly" => Some(StopComparator::Exactly),
            _ => None,
        }
    }

    pub fn accepts(self, stops: usize, requested: usize) -> bool {
        match self {
            StopComparator::Minimum => stops >= requested,
            StopComparator::Maximum => stops <= requested,
            StopComparator::Exactly => stops == requested,
        }
    }
}

/// A path together with its total price, formatted as `A-B-C-T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedPath {
    pub nodes: Path,
    pub price: Price,
}

impl PricedPath {
    pub fn stops(&self) -> usize {
        stop_count(self.nodes.as_slice())
    }
}

impl fmt::Display for PricedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.nodes {
            write!(f, "{}-", code)?;
        }
        write!(f, "{}", self.price)
    }
}

/// Join formatted itineraries with `", "`
pub fn format_paths(paths: &[PricedPath]) -> String {
    paths
        .iter()
        .map(PricedPath::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Read-only analytics over a [`WeightedGraphIndex`]
pub struct PathAnalytics<'a> {
    index: &'a WeightedGraphIndex,
    config: AnalyticsConfig,
}

impl<'a> PathAnalytics<'a> {
    /// Analytics with the default configuration
    pub fn new(index: &'a WeightedGraphIndex) -> Self {
        Self::with_config(index, AnalyticsConfig::default())
    }

    pub fn with_config(index: &'a WeightedGraphIndex, config: AnalyticsConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &'a WeightedGraphIndex {
        self.index
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Total price of the itinerary `codes`, if it is a realizable path.
    ///
    /// Only the full sequence counts: every consecutive pair being priced is
    /// not enough when the hops are not traversable in this direction.
    pub fn exact_price<S: AsRef<str>>(&self, codes: &[S]) -> Option<Price> {
        if codes.len() < 2 || !self.index.graph().path_matches(codes) {
            return None;
        }
        self.path_price(codes).ok()
    }

    /// Cheapest itinerary from `source` to `destination`, loops included.
    ///
    /// On a tie the first itinerary in enumeration order wins.
    pub fn cheapest_path(&self, source: &str, destination: &str) -> Option<PricedPath> {
        if !self.index.contains(source) || !self.index.contains(destination) {
            return None;
        }

        let mut cheapest: Option<PricedPath> = None;
        for nodes in self.index.graph().depth_first_all(source, destination) {
            let Ok(price) = self.path_price(nodes.as_slice()) else {
                continue;
            };
            if cheapest.as_ref().map_or(true, |best| price < best.price) {
                cheapest = Some(PricedPath { nodes, price });
            }
        }

        debug!("Cheapest {} -> {}: {:?}", source, destination, cheapest);
        cheapest
    }

    /// Number of itineraries whose stop count satisfies `comparator` against `stops`
    pub fn count_by_stops(
        &self,
        comparator: StopComparator,
        stops: usize,
        source: &str,
        destination: &str,
    ) -> usize {
        let graph = self.index.graph();
        let paths = if self.config.cyclic_extensions {
            graph.depth_first_all(source, destination)
        } else {
            graph.depth_first(source, destination)
        };

        paths
            .iter()
            .filter(|path| comparator.accepts(stop_count(path.as_slice()), stops))
            .count()
    }

    /// Itineraries strictly cheaper than `limit`, sorted by price.
    ///
    /// Equal prices keep enumeration order.
    pub fn paths_below(&self, limit: Price, source: &str, destination: &str) -> Vec<PricedPath> {
        let mut matches: Vec<PricedPath> = self
            .index
            .graph()
            .depth_first_all(source, destination)
            .into_iter()
            .filter_map(|nodes| {
                let price = self.path_price(nodes.as_slice()).ok()?;
                (price < limit).then_some(PricedPath { nodes, price })
            })
            .collect();

        matches.sort_by_key(|path| path.price);
        matches
    }

    /// [`PathAnalytics::paths_below`] formatted as one comma-separated line;
    /// empty when nothing qualifies.
    pub fn paths_below_price(&self, limit: Price, source: &str, destination: &str) -> String {
        format_paths(&self.paths_below(limit, source, destination))
    }

    /// Sum of hop prices; a total outside the price range is a lookup failure
    fn path_price(&self, codes: &[impl AsRef<str>]) -> LookupResult<Price> {
        let mut total: Price = 0;
        for pair in codes.windows(2) {
            let hop = self.index.price_by_code(pair[0].as_ref(), pair[1].as_ref())?;
            total = total.checked_add(hop).ok_or_else(|| {
                let path: Vec<&str> = codes.iter().map(AsRef::as_ref).collect();
                LookupError::PriceOverflow(path.join("-"))
            })?;
        }
        Ok(total)
    }
}
