//! Job posting lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Settings controlling job posting lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Days a posting stays live before it expires.
    #[serde(default = "default_posting_ttl_days")]
    pub posting_ttl_days: i64,
    /// Number of recent items shown on dashboards.
    #[serde(default = "default_dashboard_recent")]
    pub dashboard_recent_limit: i64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            posting_ttl_days: default_posting_ttl_days(),
            dashboard_recent_limit: default_dashboard_recent(),
        }
    }
}

fn default_posting_ttl_days() -> i64 {
    30
}

fn default_dashboard_recent() -> i64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JobsConfig::default();
        assert_eq!(config.posting_ttl_days, 30);
        assert_eq!(config.dashboard_recent_limit, 5);
    }
}
