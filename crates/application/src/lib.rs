//! dns-audit application layer
pub mod domain_record;
pub mod ports;
pub mod use_cases;

pub use domain_record::DomainRecord;
pub use ports::DnsResolver;
pub use use_cases::classify_domain::{ClassifyDomainUseCase, DomainClassification};
