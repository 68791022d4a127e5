use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::networks::NetworksConfig;

/// Root configuration, loaded from a TOML file or built from defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub networks: NetworksConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from `path` when given, otherwise use built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
                Self::from_toml_str(&raw)
            }
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.networks.reference.is_empty() {
            return Err(ConfigError::Invalid(
                "networks.reference must list at least one CIDR block".to_string(),
            ));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "dns.query_timeout_ms must be positive".to_string(),
            ));
        }
        if self.dns.attempts == 0 {
            return Err(ConfigError::Invalid(
                "dns.attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
