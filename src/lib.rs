//! Farepath
//!
//! Route and fare analytics over a small directed network of airports.
//! A connections table such as
//!
//! ```text
//! Connections: NUE-FRA-43, NUE-AMS-67, FRA-AMS-17, FRA-LHR-27, LHR-NUE-23
//! ```
//!
//! is parsed into a [`WeightedGraphIndex`], and [`PathAnalytics`] answers:
//!
//! - the price of an exact itinerary
//! - the cheapest itinerary between two airports
//! - how many itineraries have a given number of stops
//! - every itinerary below a price ceiling
//!
//! The [`nlq`] module maps English questions onto these operations and
//! [`session`] runs a whole question file.
//!
//! ## Example Usage
//!
//! ```rust
//! use farepath::{PathAnalytics, WeightedGraphIndex};
//!
//! let index: WeightedGraphIndex =
//!     "Connections: NUE-FRA-43, NUE-AMS-67, FRA-AMS-17, FRA-LHR-27, LHR-NUE-23"
//!         .parse()
//!         .unwrap();
//! let analytics = PathAnalytics::new(&index);
//!
//! assert_eq!(analytics.exact_price(&["NUE", "FRA", "LHR"]), Some(70));
//! assert_eq!(
//!     analytics.cheapest_path("NUE", "AMS").unwrap().to_string(),
//!     "NUE-FRA-AMS-60"
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod nlq;
pub mod query;
pub mod session;

// Re-export main types for convenience
pub use graph::{
    AdjacencyGraph, ConnectionRecord, LookupError, LookupResult, ParseError, ParseResult, Path,
    Price, WeightedGraphIndex,
};

pub use query::{
    AnalyticsConfig, PathAnalytics, PricedPath, StopComparator, CONNECTION_NOT_FOUND,
};

pub use nlq::{Answer, NlqError, NlqResult, Question, QuestionEvaluator};

pub use session::{OutputFormat, Session, SessionConfig, SessionError, SessionResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
