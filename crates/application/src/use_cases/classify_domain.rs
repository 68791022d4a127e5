use std::sync::Arc;

use dns_audit_domain::{AddressBlock, DomainError, Hostname, NetworkSet};
use tracing::debug;

use crate::domain_record::DomainRecord;
use crate::ports::DnsResolver;

/// Everything a caller learns about one hostname: the validated name, its
/// resolved records, and the two membership flags.
#[derive(Debug, Clone)]
pub struct DomainClassification {
    pub hostname: Hostname,
    pub addresses: Vec<AddressBlock>,
    pub name_servers: Vec<Hostname>,
    pub hosted: bool,
    pub delegated: bool,
}

impl DomainClassification {
    /// First resolved address, the one batch reports show.
    pub fn first_address(&self) -> Option<&AddressBlock> {
        self.addresses.first()
    }
}

/// Classifies hostnames against the reference networks.
pub struct ClassifyDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
    networks: Arc<NetworkSet>,
}

impl ClassifyDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, networks: Arc<NetworkSet>) -> Self {
        Self { resolver, networks }
    }

    /// Resolve and classify `hostname`. Fails only on invalid hostname
    /// syntax; resolution trouble degrades to empty records and `false`
    /// flags.
    pub async fn classify(&self, hostname: &str) -> Result<DomainClassification, DomainError> {
        let mut record = DomainRecord::new(hostname, Arc::clone(&self.resolver))?;

        let hosted = record.is_hosted_in(&self.networks).await;
        let delegated = record.is_delegated_to(&self.networks).await;
        let addresses = record.addresses().await.to_vec();
        let name_servers = record.name_servers().await.to_vec();

        debug!(
            host = %record.hostname(),
            hosted,
            delegated,
            addresses = addresses.len(),
            name_servers = name_servers.len(),
            "domain classified"
        );

        Ok(DomainClassification {
            hostname: record.hostname().clone(),
            addresses,
            name_servers,
            hosted,
            delegated,
        })
    }

    pub fn networks(&self) -> &NetworkSet {
        &self.networks
    }
}
