//! Dashboard Configuration
//!
//! JSON settings shared by every page. Missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::hierarchy::DEFAULT_EXPAND_DEPTH;

fn default_page_size() -> usize {
    10
}

fn default_expand_depth() -> usize {
    DEFAULT_EXPAND_DEPTH
}

fn default_latency_ms() -> u32 {
    1000
}

fn default_toast_ms() -> u32 {
    4000
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rows per list page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Hierarchy levels expanded on first render
    #[serde(default = "default_expand_depth")]
    pub default_expand_depth: usize,
    /// Artificial delay before a simulated submission completes
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u32,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ms")]
    pub toast_duration_ms: u32,
    /// `tracing` filter directive, e.g. "info" or "community_admin_core=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_expand_depth: default_expand_depth(),
            simulated_latency_ms: default_latency_ms(),
            toast_duration_ms: default_toast_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidPageSize);
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_expand_depth, 2);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{"page_size": 25, "log_filter": "debug"}"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.simulated_latency_ms, 1000);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"page_size": 0}"#),
            Err(CoreError::InvalidPageSize)
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            DashboardConfig::from_json("{page_size"),
            Err(CoreError::Json(_))
        ));
    }
}
