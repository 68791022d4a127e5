use serde::{Deserialize, Serialize};

/// Reference networks the audit classifies hostnames against.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworksConfig {
    /// CIDR blocks owned by the audited infrastructure provider.
    /// Entries that fail to parse are skipped with a warning.
    #[serde(default = "default_reference_networks")]
    pub reference: Vec<String>,
}

impl Default for NetworksConfig {
    fn default() -> Self {
        Self {
            reference: default_reference_networks(),
        }
    }
}

fn default_reference_networks() -> Vec<String> {
    [
        "208.187.218.0/24",
        "209.210.220.0/24",
        "184.178.213.0/24",
        "70.102.216.0/24",
        "70.102.218.0/24",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
