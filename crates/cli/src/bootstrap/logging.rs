use dns_audit_domain::Config;
use tracing::info;

/// Initialize the global subscriber from the configured level, with an
/// optional command-line override.
pub fn init_logging(config: &Config, override_level: Option<&str>) {
    let level = override_level.unwrap_or(&config.logging.level);
    let log_level = level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Logging initialized at level: {}", level);
}
