use std::path::Path;

use anyhow::Context;
use dns_audit_application::DomainClassification;

/// Tab-separated report row: hostname, first A record (or `-`), hosted
/// flag, delegated flag.
pub fn tsv_row(classification: &DomainClassification) -> String {
    let first_address = classification
        .first_address()
        .map(|address| address.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{}\t{}\t{}\t{}",
        classification.hostname, first_address, classification.hosted, classification.delegated
    )
}

/// Read a batch input file: one hostname per line, blank lines and `#`
/// comments skipped.
pub fn read_hostnames(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read hostname list {}", path.display()))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
