//! Configuration for dns-audit, organized by section:
//! - `root`: top-level `Config` with load/validate
//! - `networks`: reference CIDR blocks to classify against
//! - `dns`: resolver timeout and retry settings
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod networks;
pub mod root;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use networks::NetworksConfig;
pub use root::Config;
