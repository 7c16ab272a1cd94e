//! Analytics configuration

use serde::{Deserialize, Serialize};

/// Settings for [`PathAnalytics`](super::PathAnalytics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Count paths that continue through a loop at the destination when
    /// answering stop-count questions. Cheapest-path and below-price
    /// questions always include them.
    pub cyclic_extensions: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            cyclic_extensions: true,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_cyclic_extensions(mut self, enabled: bool) -> Self {
        self.cyclic_extensions = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_cyclic_extensions() {
        assert!(AnalyticsConfig::default().cyclic_extensions);
        assert!(!AnalyticsConfig::default().with_cyclic_extensions(false).cyclic_extensions);
    }

    #[test]
    fn test_deserialize_missing_fields_uses_default() {
        let config: AnalyticsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalyticsConfig::default());

        let config: AnalyticsConfig = serde_json::from_str(r#"{"cyclic_extensions":false}"#).unwrap();
        assert!(!config.cyclic_extensions);
    }
}
