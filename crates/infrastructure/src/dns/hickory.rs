use std::time::Duration;

use async_trait::async_trait;
use dns_audit_application::ports::DnsResolver;
use dns_audit_domain::config::DnsConfig;
use dns_audit_domain::{DomainError, RecordType};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use tracing::{debug, info, warn};

/// [`DnsResolver`] adapter over hickory's tokio resolver.
pub struct HickoryDnsResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryDnsResolver {
    /// Build from the host's resolver configuration when readable,
    /// otherwise from hickory's defaults, applying the configured timeout
    /// and attempt count either way.
    pub fn from_config(config: &DnsConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_millis(config.query_timeout_ms);
        opts.attempts = config.attempts;

        let resolver = match hickory_resolver::system_conf::read_system_conf() {
            Ok((resolver_config, _)) => {
                debug!("using system resolver configuration");
                TokioAsyncResolver::tokio(resolver_config, opts)
            }
            Err(e) => {
                warn!(error = %e, "cannot read system resolver configuration, using defaults");
                TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
            }
        };

        info!(
            timeout_ms = config.query_timeout_ms,
            attempts = config.attempts,
            "DNS resolver ready"
        );

        Self { resolver }
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    async fn lookup(
        &self,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let result: Result<Vec<String>, ResolveError> = match record_type {
            RecordType::A => self
                .resolver
                .ipv4_lookup(host)
                .await
                .map(|lookup| lookup.iter().map(|a| a.0.to_string()).collect()),
            RecordType::Ns => self
                .resolver
                .ns_lookup(host)
                .await
                .map(|lookup| lookup.iter().map(|ns| ns.0.to_utf8()).collect()),
        };

        match result {
            Ok(values) => {
                debug!(host = %host, record_type = %record_type, count = values.len(), "lookup complete");
                Ok(values)
            }
            Err(e) => flatten_no_records(host, record_type, e),
        }
    }
}

/// hickory reports "name exists, no records of that type" (and NXDOMAIN)
/// as an error; the port contract wants an empty answer for those and an
/// error only for real lookup failures.
fn flatten_no_records(
    host: &str,
    record_type: RecordType,
    error: ResolveError,
) -> Result<Vec<String>, DomainError> {
    if matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
        debug!(host = %host, record_type = %record_type, "no records found");
        Ok(Vec::new())
    } else {
        Err(DomainError::ResolutionFailed(format!(
            "{record_type} lookup for {host}: {error}"
        )))
    }
}
