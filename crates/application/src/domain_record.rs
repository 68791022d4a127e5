use std::sync::Arc;

use dns_audit_domain::{AddressBlock, DomainError, Hostname, NetworkSet, RecordType};
use tracing::{debug, warn};

use crate::ports::DnsResolver;

/// Lazily resolved record cache. Transitions once from `Unresolved` to
/// either `Resolved` or `Failed` and stays there; `Failed` reads as empty
/// but keeps the reason.
#[derive(Debug, Clone)]
enum LazyRecords<T> {
    Unresolved,
    Resolved(Vec<T>),
    Failed(String),
}

impl<T> LazyRecords<T> {
    fn records(&self) -> &[T] {
        match self {
            LazyRecords::Resolved(records) => records,
            LazyRecords::Unresolved | LazyRecords::Failed(_) => &[],
        }
    }

    fn is_unresolved(&self) -> bool {
        matches!(self, LazyRecords::Unresolved)
    }

    fn failure(&self) -> Option<&str> {
        match self {
            LazyRecords::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// One hostname under audit.
///
/// NS and A records resolve through the [`DnsResolver`] port on first
/// access and stay cached; a failed lookup is logged and reads as empty
/// afterwards, never propagated. Record accessors take `&mut self`, which
/// makes the one-shot cache transition a single-owner affair.
pub struct DomainRecord {
    hostname: Hostname,
    resolver: Arc<dyn DnsResolver>,
    name_servers: LazyRecords<Hostname>,
    addresses: LazyRecords<AddressBlock>,
}

impl DomainRecord {
    /// Validates the hostname. No lookup happens until a record accessor
    /// is called.
    pub fn new(hostname: &str, resolver: Arc<dyn DnsResolver>) -> Result<Self, DomainError> {
        Ok(Self {
            hostname: Hostname::new(hostname)?,
            resolver,
            name_servers: LazyRecords::Unresolved,
            addresses: LazyRecords::Unresolved,
        })
    }

    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }

    /// Nameserver targets of this hostname, resolved on first call.
    /// Malformed targets are skipped; a failed lookup yields an empty
    /// slice.
    pub async fn name_servers(&mut self) -> &[Hostname] {
        if self.name_servers.is_unresolved() {
            self.name_servers = match self
                .resolver
                .lookup(self.hostname.as_str(), RecordType::Ns)
                .await
            {
                Ok(targets) => {
                    let mut names = Vec::with_capacity(targets.len());
                    for target in &targets {
                        match Hostname::new(target) {
                            Ok(name) => names.push(name),
                            Err(e) => warn!(
                                host = %self.hostname,
                                target = %target,
                                error = %e,
                                "skipping malformed NS target"
                            ),
                        }
                    }
                    debug!(host = %self.hostname, count = names.len(), "NS records resolved");
                    LazyRecords::Resolved(names)
                }
                Err(e) => {
                    warn!(host = %self.hostname, error = %e, "NS resolution failed, treating as empty");
                    LazyRecords::Failed(e.to_string())
                }
            };
        }

        self.name_servers.records()
    }

    /// A records of this hostname as /32 blocks, resolved on first call.
    pub async fn addresses(&mut self) -> &[AddressBlock] {
        if self.addresses.is_unresolved() {
            self.addresses = match self
                .resolver
                .lookup(self.hostname.as_str(), RecordType::A)
                .await
            {
                Ok(values) => {
                    let mut blocks = Vec::with_capacity(values.len());
                    for value in &values {
                        match AddressBlock::parse(value) {
                            Ok(block) => blocks.push(block),
                            Err(e) => warn!(
                                host = %self.hostname,
                                value = %value,
                                error = %e,
                                "skipping malformed A record"
                            ),
                        }
                    }
                    debug!(host = %self.hostname, count = blocks.len(), "A records resolved");
                    LazyRecords::Resolved(blocks)
                }
                Err(e) => {
                    warn!(host = %self.hostname, error = %e, "A resolution failed, treating as empty");
                    LazyRecords::Failed(e.to_string())
                }
            };
        }

        self.addresses.records()
    }

    /// Why A resolution produced no data, when it failed outright.
    pub fn address_failure(&self) -> Option<&str> {
        self.addresses.failure()
    }

    /// Why NS resolution produced no data, when it failed outright.
    pub fn name_server_failure(&self) -> Option<&str> {
        self.name_servers.failure()
    }

    /// True when any resolved address of this hostname falls inside
    /// `networks`. Triggers address resolution when still pending.
    pub async fn is_hosted_in(&mut self, networks: &NetworkSet) -> bool {
        self.addresses()
            .await
            .iter()
            .any(|address| networks.contains(address))
    }

    /// True when any nameserver of this hostname resolves to an address
    /// inside `networks`. Each target gets its own A lookup; a target that
    /// fails to resolve is logged and skipped without aborting the scan.
    pub async fn is_delegated_to(&mut self, networks: &NetworkSet) -> bool {
        let targets: Vec<Hostname> = self.name_servers().await.to_vec();
        let resolver = Arc::clone(&self.resolver);

        for target in targets {
            let values = match resolver.lookup(target.as_str(), RecordType::A).await {
                Ok(values) => values,
                Err(e) => {
                    warn!(
                        host = %self.hostname,
                        target = %target,
                        error = %e,
                        "nameserver address resolution failed, skipping"
                    );
                    continue;
                }
            };

            for value in values {
                match AddressBlock::parse(&value) {
                    Ok(block) if networks.contains(&block) => {
                        debug!(host = %self.hostname, target = %target, address = %block, "delegation match");
                        return true;
                    }
                    Ok(_) => {}
                    Err(e) => warn!(
                        target = %target,
                        value = %value,
                        error = %e,
                        "skipping malformed nameserver address"
                    ),
                }
            }
        }

        false
    }
}
