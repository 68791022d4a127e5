mod helpers;

use std::sync::Arc;

use dns_audit_application::DomainRecord;
use dns_audit_domain::{DomainError, NetworkSet, RecordType};
use helpers::mock_resolver::MockDnsResolver;

fn reference_set() -> NetworkSet {
    NetworkSet::from_cidrs(&["208.187.218.0/24"])
}

#[test]
fn test_invalid_hostname_fails_construction() {
    let resolver = Arc::new(MockDnsResolver::new());
    let result = DomainRecord::new("not a domain!!", resolver);

    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
}

#[tokio::test]
async fn test_construction_performs_no_lookup() {
    let resolver = Arc::new(MockDnsResolver::new());
    let _record = DomainRecord::new("example.com", resolver.clone()).unwrap();

    assert_eq!(resolver.query_count().await, 0);
}

#[tokio::test]
async fn test_addresses_resolve_once_and_cache() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records("example.com", RecordType::A, &["93.184.216.34", "8.8.8.8"])
        .await;

    let mut record = DomainRecord::new("example.com", resolver.clone()).unwrap();

    let first: Vec<String> = record.addresses().await.iter().map(|a| a.to_string()).collect();
    assert_eq!(first, vec!["93.184.216.34", "8.8.8.8"]);
    assert!(record.addresses().await.iter().all(|a| a.prefix() == 32));

    record.addresses().await;
    record.addresses().await;
    assert_eq!(resolver.queries_for("example.com", RecordType::A).await, 1);
}

#[tokio::test]
async fn test_name_servers_normalize_targets() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records(
            "example.com",
            RecordType::Ns,
            &["NS1.Example.NET.", "ns2.example.net.", "!!bad target!!"],
        )
        .await;

    let mut record = DomainRecord::new("example.com", resolver.clone()).unwrap();

    let names: Vec<String> = record
        .name_servers()
        .await
        .iter()
        .map(|n| n.to_string())
        .collect();
    // The malformed target is skipped, the rest are lowercased with the
    // root dot removed.
    assert_eq!(names, vec!["ns1.example.net", "ns2.example.net"]);
}

#[tokio::test]
async fn test_failed_resolution_reads_as_empty() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_failure("example.com", RecordType::A).await;
    resolver.set_failure("example.com", RecordType::Ns).await;

    let mut record = DomainRecord::new("example.com", resolver.clone()).unwrap();

    assert!(record.addresses().await.is_empty());
    assert!(record.name_servers().await.is_empty());
    assert!(!record.is_hosted_in(&reference_set()).await);

    // The failure stays observable, and the state is terminal: no retry.
    assert!(record.address_failure().is_some());
    assert!(record.name_server_failure().is_some());
    record.addresses().await;
    assert_eq!(resolver.queries_for("example.com", RecordType::A).await, 1);
}

#[tokio::test]
async fn test_is_hosted_in_matches_reference_network() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records("shop.example.com", RecordType::A, &["208.187.218.200"])
        .await;

    let mut record = DomainRecord::new("shop.example.com", resolver).unwrap();
    assert!(record.is_hosted_in(&reference_set()).await);
}

#[tokio::test]
async fn test_is_hosted_in_outside_network() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records("example.com", RecordType::A, &["8.8.8.8"])
        .await;

    let mut record = DomainRecord::new("example.com", resolver).unwrap();
    assert!(!record.is_hosted_in(&reference_set()).await);
}

#[tokio::test]
async fn test_is_delegated_to_resolves_each_target() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records(
            "example.com",
            RecordType::Ns,
            &["ns1.offsite.net.", "ns2.provider.net."],
        )
        .await;
    // First target resolves outside the reference set, second inside.
    resolver
        .set_records("ns1.offsite.net", RecordType::A, &["1.2.3.4"])
        .await;
    resolver
        .set_records("ns2.provider.net", RecordType::A, &["208.187.218.53"])
        .await;

    let mut record = DomainRecord::new("example.com", resolver).unwrap();
    assert!(record.is_delegated_to(&reference_set()).await);
}

#[tokio::test]
async fn test_is_delegated_to_skips_failing_target() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records(
            "example.com",
            RecordType::Ns,
            &["ns1.broken.net.", "ns2.provider.net."],
        )
        .await;
    resolver.set_failure("ns1.broken.net", RecordType::A).await;
    resolver
        .set_records("ns2.provider.net", RecordType::A, &["208.187.218.53"])
        .await;

    let mut record = DomainRecord::new("example.com", resolver).unwrap();
    // The broken target does not abort the scan.
    assert!(record.is_delegated_to(&reference_set()).await);
}

#[tokio::test]
async fn test_is_delegated_to_false_without_matches() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_records("example.com", RecordType::Ns, &["ns1.offsite.net."])
        .await;
    resolver
        .set_records("ns1.offsite.net", RecordType::A, &["1.2.3.4"])
        .await;

    let mut record = DomainRecord::new("example.com", resolver).unwrap();
    assert!(!record.is_delegated_to(&reference_set()).await);
}
