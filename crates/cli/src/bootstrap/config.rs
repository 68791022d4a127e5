use std::path::Path;

use dns_audit_domain::Config;

/// Load and validate the configuration. Runs before logging is up, so it
/// stays silent; `main` logs the summary afterwards.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::load(path)?;
    config.validate()?;
    Ok(config)
}
