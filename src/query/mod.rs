//! Query processing module
//!
//! Read-only analytics over a built [`WeightedGraphIndex`](crate::graph::WeightedGraphIndex):
//! exact itinerary prices, cheapest itineraries, stop-count filtering and
//! price-bounded enumeration.

pub mod analytics;
pub mod config;

// Re-export main types
pub use analytics::{
    format_paths, PathAnalytics, PricedPath, StopComparator, CONNECTION_NOT_FOUND, LIST_SEPARATOR,
};
pub use config::AnalyticsConfig;
