//! dns-audit domain layer
pub mod address_block;
pub mod config;
pub mod errors;
pub mod hostname;
pub mod network_set;
pub mod record_type;

pub use address_block::AddressBlock;
pub use config::{Config, ConfigError};
pub use errors::DomainError;
pub use hostname::Hostname;
pub use network_set::NetworkSet;
pub use record_type::RecordType;
