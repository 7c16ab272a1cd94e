//! Connections table parser using Pest

use super::types::{ConnectionRecord, Price};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "graph/connections.pest"]
struct ConnectionsParser;

/// Errors raised while building a graph from its textual definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid connections table '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("Distance between airports must be greater than zero in '{record}'")]
    NonPositivePrice { record: String },

    #[error("Price {price} in '{record}' is out of range")]
    PriceOutOfRange { record: String, price: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Remove every whitespace character, not just runs of them
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a `Connections:` line into edge records, in declaration order
pub fn parse_connections(input: &str) -> ParseResult<Vec<ConnectionRecord>> {
    let compact = strip_whitespace(input);
    let pairs = ConnectionsParser::parse(Rule::connections, &compact).map_err(|e| {
        ParseError::Malformed {
            input: input.to_string(),
            reason: e.variant.message().into_owned(),
        }
    })?;

    let mut records = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::connections {
            continue;
        }
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::connection => records.push(parse_record(inner)?),
                Rule::EOI => break,
                _ => {}
            }
        }
    }

    Ok(records)
}

fn parse_record(pair: Pair<Rule>) -> ParseResult<ConnectionRecord> {
    let text = pair.as_str().to_string();
    let mut inner = pair.into_inner();

    let (Some(source), Some(destination), Some(price)) = (inner.next(), inner.next(), inner.next())
    else {
        return Err(ParseError::Malformed {
            input: text,
            reason: "expected SOURCE-DESTINATION-PRICE".to_string(),
        });
    };

    let price: Price = price.as_str().parse().map_err(|_| ParseError::PriceOutOfRange {
        record: text.clone(),
        price: price.as_str().to_string(),
    })?;

    if price == 0 {
        return Err(ParseError::NonPositivePrice { record: text });
    }

    Ok(ConnectionRecord::new(source.as_str(), destination.as_str(), price))
}
