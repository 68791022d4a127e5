#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use dns_audit_application::ports::DnsResolver;
use dns_audit_domain::{DomainError, RecordType};
use tokio::sync::RwLock;

/// Programmable in-memory resolver for tests.
///
/// Unconfigured names resolve to an empty record set; names registered via
/// `set_failure` fail with a resolution error. A query counter makes
/// caching behavior observable.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), Vec<String>>>>,
    failures: Arc<RwLock<HashSet<(String, RecordType)>>>,
    queries: Arc<RwLock<Vec<(String, RecordType)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_records(&self, host: &str, record_type: RecordType, values: &[&str]) {
        self.responses.write().await.insert(
            (host.to_string(), record_type),
            values.iter().map(|v| v.to_string()).collect(),
        );
    }

    pub async fn set_failure(&self, host: &str, record_type: RecordType) {
        self.failures
            .write()
            .await
            .insert((host.to_string(), record_type));
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    pub async fn queries_for(&self, host: &str, record_type: RecordType) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|(h, t)| h == host && *t == record_type)
            .count()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn lookup(
        &self,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let key = (host.to_string(), record_type);
        self.queries.write().await.push(key.clone());

        if self.failures.read().await.contains(&key) {
            return Err(DomainError::ResolutionFailed(format!(
                "simulated lookup failure for {host}"
            )));
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
