//! dns-audit infrastructure layer
pub mod dns;

pub use dns::hickory::HickoryDnsResolver;
