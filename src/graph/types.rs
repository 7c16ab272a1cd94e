//! Core type definitions for the connection graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fare between two airports, in euros
pub type Price = u64;

/// One `SRC-DST-PRICE` entry of the connections table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub source: String,
    pub destination: String,
    pub price: Price,
}

impl ConnectionRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, price: Price) -> Self {
        ConnectionRecord {
            source: source.into(),
            destination: destination.into(),
            price,
        }
    }
}

impl fmt::Display for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.source, self.destination, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_record_display() {
        let record = ConnectionRecord::new("NUE", "FRA", 43);
        assert_eq!(record.source, "NUE");
        assert_eq!(record.destination, "FRA");
        assert_eq!(format!("{}", record), "NUE-FRA-43");
    }

    #[test]
    fn test_connection_record_serde() {
        let record = ConnectionRecord::new("LHR", "NUE", 23);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"source":"LHR","destination":"NUE","price":23}"#);

        let back: ConnectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
