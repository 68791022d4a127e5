use async_trait::async_trait;
use dns_audit_domain::{DomainError, RecordType};

/// Port for DNS lookups.
///
/// Implementations return raw record values in answer order: dotted quads
/// for A queries, target names for NS queries. A name with no records of
/// the requested type (including NXDOMAIN) is `Ok` with an empty vector;
/// errors are reserved for lookup failures (timeout, transport, SERVFAIL).
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn lookup(
        &self,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError>;
}
