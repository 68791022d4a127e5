use serde::{Deserialize, Serialize};

/// DNS resolution settings passed through to the resolver adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Per-query timeout in milliseconds (default: 5000)
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Lookup attempts per query (default: 2)
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_attempts() -> usize {
    2
}
