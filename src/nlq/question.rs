//! Typed questions and their answers
//!
//! Each recognized question form maps to exactly one [`Question`] variant;
//! evaluation is a plain `match` over the variants.

use super::{NlqError, NlqResult};
use crate::graph::Price;
use crate::query::{format_paths, PathAnalytics, PricedPath, StopComparator, CONNECTION_NOT_FOUND};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Compiled forms of the supported questions
struct QuestionPatterns {
    /// `What is the price of the connection NUE-FRA-LHR?`
    price: Regex,
    /// `What is the cheapest connection from NUE to AMS?`
    cheapest: Regex,
    /// `How many different connections with maximum 3 stops exist between NUE and FRA?`
    stops: Regex,
    /// `Find all connections from NUE to LHR below 170 Euros!`
    below: Regex,
}

impl QuestionPatterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            price: Regex::new(
                r"(?i)^(?:what\s+is\s+)?(?:the\s+)?price\s+(?:of\s+(?:the\s+)?)?connection\s+(\w+(?:-\w+)*)\s*\??$",
            )?,
            cheapest: Regex::new(
                r"(?i)^(?:what\s+is\s+)?(?:the\s+)?cheapest\s+connection\s+from\s+(\w+)\s+to\s+(\w+)\s*\??$",
            )?,
            stops: Regex::new(
                r"(?i)^(?:how\s+many\s+)?(?:different\s+)?connections\s+(?:with\s+)?(maximum|minimum|exactly)\s+(\d+)\s+stops?\s+(?:exists?\s+)?between\s+(\w+)\s+and\s+(\w+)\s*\??$",
            )?,
            below: Regex::new(
                r"(?i)^(?:(?:find\s+)?(?:all\s+)?)?connections\s+from\s+(\w+)\s+to\s+(\w+)\s+below\s+(\d+)\s*euros?\S?$",
            )?,
        })
    }
}

static PATTERNS: LazyLock<Result<QuestionPatterns, regex::Error>> =
    LazyLock::new(QuestionPatterns::compile);

/// A recognized question with typed arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Price of an exact itinerary
    ExactPrice { codes: Vec<String> },
    /// Cheapest itinerary between two airports
    Cheapest { source: String, destination: String },
    /// Number of itineraries by stop count
    CountByStops {
        comparator: StopComparator,
        stops: usize,
        source: String,
        destination: String,
    },
    /// Every itinerary below a price ceiling
    BelowPrice {
        limit: Price,
        source: String,
        destination: String,
    },
}

/// Collapse whitespace runs to a single space and trim the ends
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capture(captures: &Captures<'_>, group: usize) -> String {
    captures
        .get(group)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn number<T: FromStr>(captures: &Captures<'_>, group: usize) -> NlqResult<T> {
    let text = capture(captures, group);
    text.parse().map_err(|_| NlqError::InvalidNumber(text))
}

impl Question {
    /// Recognize `text` as one of the supported question forms.
    ///
    /// Keywords match case-insensitively; airport codes are kept exactly as
    /// written.
    pub fn parse(text: &str) -> NlqResult<Self> {
        let patterns = PATTERNS
            .as_ref()
            .map_err(|e| NlqError::Pattern(e.to_string()))?;
        let normalized = normalize(text);

        if let Some(captures) = patterns.price.captures(&normalized) {
            let codes = capture(&captures, 1).split('-').map(str::to_string).collect();
            return Ok(Question::ExactPrice { codes });
        }

        if let Some(captures) = patterns.cheapest.captures(&normalized) {
            return Ok(Question::Cheapest {
                source: capture(&captures, 1),
                destination: capture(&captures, 2),
            });
        }

        if let Some(captures) = patterns.stops.captures(&normalized) {
            let keyword = capture(&captures, 1);
            let comparator = StopComparator::from_keyword(&keyword)
                .ok_or_else(|| NlqError::Unrecognized(normalized.clone()))?;
            return Ok(Question::CountByStops {
                comparator,
                stops: number(&captures, 2)?,
                source: capture(&captures, 3),
                destination: capture(&captures, 4),
            });
        }

        if let Some(captures) = patterns.below.captures(&normalized) {
            return Ok(Question::BelowPrice {
                limit: number(&captures, 3)?,
                source: capture(&captures, 1),
                destination: capture(&captures, 2),
            });
        }

        Err(NlqError::Unrecognized(normalized))
    }

    /// Evaluate the question against `analytics`
    pub fn answer(&self, analytics: &PathAnalytics<'_>) -> Answer {
        match self {
            Question::ExactPrice { codes } => analytics
                .exact_price(codes.as_slice())
                .map_or(Answer::NotFound, Answer::Price),
            Question::Cheapest { source, destination } => analytics
                .cheapest_path(source, destination)
                .map_or(Answer::NotFound, Answer::Path),
            Question::CountByStops {
                comparator,
                stops,
                source,
                destination,
            } => Answer::Count(analytics.count_by_stops(*comparator, *stops, source, destination)),
            Question::BelowPrice {
                limit,
                source,
                destination,
            } => {
                let paths = analytics.paths_below(*limit, source, destination);
                if paths.is_empty() {
                    Answer::NotFound
                } else {
                    Answer::Paths(paths)
                }
            }
        }
    }
}

impl FromStr for Question {
    type Err = NlqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Result of evaluating a [`Question`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Price(Price),
    Path(PricedPath),
    Count(usize),
    Paths(Vec<PricedPath>),
    NotFound,
}

impl Answer {
    pub fn is_found(&self) -> bool {
        !matches!(self, Answer::NotFound)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Price(price) => write!(f, "{}", price),
            Answer::Path(path) => write!(f, "{}", path),
            Answer::Count(count) => write!(f, "{}", count),
            Answer::Paths(paths) => write!(f, "{}", format_paths(paths)),
            Answer::NotFound => write!(f, "{}", CONNECTION_NOT_FOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  What  is\tthe price \n"), "What is the price");
    }

    #[test]
    fn test_parse_price_variants() {
        for text in [
            "What  is  the  price  of  the  connection  NUE-FRA-LHR ?",
            "price  of  the  connection  NUE-FRA-LHR?",
            "price  of  connection  NUE-FRA-LHR?",
            "price  connection  NUE-FRA-LHR?",
            "PRICE CONNECTION NUE-FRA-LHR",
        ] {
            assert_eq!(
                Question::parse(text),
                Ok(Question::ExactPrice { codes: codes(&["NUE", "FRA", "LHR"]) }),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_parse_cheapest_keeps_code_case() {
        assert_eq!(
            Question::parse("what is the CHEAPEST connection from nue to Ams?"),
            Ok(Question::Cheapest {
                source: "nue".to_string(),
                destination: "Ams".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_stop_variants() {
        for text in [
            "How  many  different  connections  with  maximum  3  stops  exists  between  NUE  and  FRA ?",
            "How many different connections maximum 3 stop exist between NUE and FRA?",
            "connections maximum 3 stop between NUE and FRA?",
        ] {
            assert_eq!(
                Question::parse(text),
                Ok(Question::CountByStops {
                    comparator: StopComparator::Maximum,
                    stops: 3,
                    source: "NUE".to_string(),
                    destination: "FRA".to_string(),
                }),
                "{}",
                text
            );
        }

        let question = Question::parse("connections exactly 1 stops exist between LHR and AMS?").unwrap();
        assert!(matches!(
            question,
            Question::CountByStops { comparator: StopComparator::Exactly, stops: 1, .. }
        ));
    }

    #[test]
    fn test_parse_below_variants() {
        for text in [
            "Find all connections from NUE to LHR below 170 euros?",
            "all connections from NUE to LHR below 170 euros?",
            "Find connections from NUE to LHR below 170 euros?",
            "connections from NUE to LHR below 170 Euros!",
            "connections from NUE to LHR below 170euro",
        ] {
            assert_eq!(
                Question::parse(text),
                Ok(Question::BelowPrice {
                    limit: 170,
                    source: "NUE".to_string(),
                    destination: "LHR".to_string(),
                }),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            Question::parse("  Which   airport is busiest? "),
            Err(NlqError::Unrecognized("Which airport is busiest?".to_string()))
        );
        assert!(Question::parse("").is_err());
    }

    #[test]
    fn test_parse_number_out_of_range() {
        let result = Question::parse(
            "connections exactly 99999999999999999999999 stops between a and b",
        );
        assert!(matches!(result, Err(NlqError::InvalidNumber(_))));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Price(70).to_string(), "70");
        assert_eq!(Answer::Count(2).to_string(), "2");
        assert_eq!(Answer::NotFound.to_string(), CONNECTION_NOT_FOUND);
        assert!(!Answer::NotFound.is_found());

        let path = PricedPath { nodes: codes(&["a", "b"]), price: 1 };
        assert_eq!(Answer::Paths(vec![path.clone(), path.clone()]).to_string(), "a-b-1, a-b-1");
        assert_eq!(
            serde_json::to_string(&Answer::Price(70)).unwrap(),
            r#"{"kind":"price","value":70}"#
        );
    }
}
