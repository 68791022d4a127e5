//! # dns-audit
//!
//! Classifies hostnames against a reference set of IPv4 networks: is the
//! host served from inside those networks, and does it delegate DNS to
//! them?

mod bootstrap;
mod report;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dns_audit_application::ClassifyDomainUseCase;
use dns_audit_domain::NetworkSet;
use dns_audit_infrastructure::HickoryDnsResolver;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "dns-audit")]
#[command(version)]
#[command(about = "Classify hostnames against a reference set of IPv4 networks")]
struct Cli {
    /// Hostnames to classify
    hostnames: Vec<String>,

    /// File with one hostname per line ('#' starts a comment)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the TSV report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref())?;
    bootstrap::init_logging(&config, cli.log_level.as_deref());

    let networks = Arc::new(NetworkSet::from_cidrs(&config.networks.reference));
    if networks.is_empty() {
        warn!("no reference network parsed, every classification will be negative");
    }
    info!(
        reference_networks = networks.len(),
        timeout_ms = config.dns.query_timeout_ms,
        "dns-audit starting"
    );

    let resolver = Arc::new(HickoryDnsResolver::from_config(&config.dns));
    let audit = ClassifyDomainUseCase::new(resolver, networks);

    let mut hostnames = cli.hostnames.clone();
    if let Some(path) = &cli.file {
        hostnames.extend(report::read_hostnames(path)?);
    }
    if hostnames.is_empty() {
        anyhow::bail!("no hostnames given; pass them as arguments or via --file");
    }

    // A single explicit hostname fails loudly; batch input skips bad
    // entries so one typo does not kill the run.
    let single = hostnames.len() == 1 && cli.file.is_none();

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    for hostname in &hostnames {
        match audit.classify(hostname).await {
            Ok(classification) => writeln!(out, "{}", report::tsv_row(&classification))?,
            Err(e) if single => return Err(e.into()),
            Err(e) => error!(host = %hostname, error = %e, "skipping hostname"),
        }
    }

    Ok(())
}
