//! End-to-end classification flow against a scripted resolver: config CIDR
//! list -> NetworkSet -> use case -> classification flags.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dns_audit_application::ports::DnsResolver;
use dns_audit_application::ClassifyDomainUseCase;
use dns_audit_domain::{Config, DomainError, NetworkSet, RecordType};

/// Fixed-script resolver; unknown names fail like an unreachable upstream.
struct ScriptedResolver {
    zones: HashMap<(String, RecordType), Vec<String>>,
}

impl ScriptedResolver {
    fn new() -> Self {
        let mut zones = HashMap::new();
        let mut add = |host: &str, record_type: RecordType, values: &[&str]| {
            zones.insert(
                (host.to_string(), record_type),
                values.iter().map(|v| v.to_string()).collect(),
            );
        };

        // Hosted inside the reference networks, nameservers elsewhere.
        add("shop.example.com", RecordType::A, &["208.187.218.200"]);
        add("shop.example.com", RecordType::Ns, &["ns1.dnsfarm.org."]);
        add("ns1.dnsfarm.org", RecordType::A, &["203.0.113.53"]);

        // Hosted elsewhere, DNS delegated to the reference networks.
        add("blog.example.net", RecordType::A, &["198.51.100.7"]);
        add(
            "blog.example.net",
            RecordType::Ns,
            &["ns1.dnsfarm.org.", "ns2.provider.example."],
        );
        add("ns2.provider.example", RecordType::A, &["70.102.216.12"]);

        // Entirely outside.
        add("example.com", RecordType::A, &["8.8.8.8"]);
        add("example.com", RecordType::Ns, &["ns1.dnsfarm.org."]);

        Self { zones }
    }
}

#[async_trait]
impl DnsResolver for ScriptedResolver {
    async fn lookup(
        &self,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        self.zones
            .get(&(host.to_string(), record_type))
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("no route to resolve {host}")))
    }
}

fn audit() -> ClassifyDomainUseCase {
    // Default config carries the five reference /24 blocks.
    let config = Config::default();
    let networks = Arc::new(NetworkSet::from_cidrs(&config.networks.reference));
    ClassifyDomainUseCase::new(Arc::new(ScriptedResolver::new()), networks)
}

#[tokio::test]
async fn test_hosted_domain_flow() {
    let classification = audit().classify("shop.example.com").await.unwrap();

    assert!(classification.hosted);
    assert!(!classification.delegated);
    assert_eq!(
        classification.first_address().unwrap().to_string(),
        "208.187.218.200"
    );
}

#[tokio::test]
async fn test_delegated_domain_flow() {
    let classification = audit().classify("blog.example.net").await.unwrap();

    assert!(!classification.hosted);
    assert!(classification.delegated);
    assert_eq!(classification.name_servers.len(), 2);
}

#[tokio::test]
async fn test_outside_domain_flow() {
    let classification = audit().classify("example.com").await.unwrap();

    assert!(!classification.hosted);
    assert!(!classification.delegated);
}

#[tokio::test]
async fn test_unresolvable_domain_flow() {
    let classification = audit().classify("dead.example.org").await.unwrap();

    assert!(!classification.hosted);
    assert!(!classification.delegated);
    assert!(classification.addresses.is_empty());
}
