//! # ns-takeover
//!
//! Reads domains from stdin, walks each delegation chain from the TLD down
//! and reports authoritative nameservers that answer with a status hinting
//! at a dangling delegation.

mod bootstrap;
mod di;

use bootstrap::{init_logging, load_config};
use clap::Parser;
use di::ScanServices;
use ns_takeover_domain::config::{OutputFormat, ResolverBackend};
use ns_takeover_domain::{CliOverrides, QueryType};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "ns-takeover")]
#[command(version)]
#[command(about = "Detects nameservers vulnerable to DNS takeover")]
struct Cli {
    /// Path to the dig binary [default: /usr/bin/dig]
    #[arg(short = 'd', long)]
    dig_binary: Option<String>,

    /// Nameserver used to resolve the top level [default: 8.8.8.8]
    #[arg(short = 's', long)]
    nameserver: Option<String>,

    /// Per-query timeout in seconds [default: 300]
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Number of concurrent workers [default: 30]
    #[arg(short = 'n', long)]
    workers: Option<usize>,

    /// Suppress diagnostic logging
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Resolver backend: dig or udp [default: dig]
    #[arg(long)]
    backend: Option<ResolverBackend>,

    /// Record type probed on each nameserver [default: A]
    #[arg(long)]
    record_type: Option<QueryType>,

    /// Status treated as a takeover signal, repeatable [default: SERVFAIL, REFUSED]
    #[arg(long = "vuln-status", value_name = "STATUS")]
    vuln_status: Vec<String>,

    /// Finding output format: text or json [default: text]
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Diagnostic log level when not quiet [default: info]
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            backend: self.backend,
            dig_binary: self.dig_binary.clone(),
            default_nameserver: self.nameserver.clone(),
            timeout: self.timeout,
            workers: self.workers,
            record_type: self.record_type,
            vulnerable_statuses: (!self.vuln_status.is_empty()).then(|| self.vuln_status.clone()),
            format: self.format,
            label: None,
            log_level: self.log_level.clone(),
            quiet: self.quiet,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        backend = %config.scanner.backend,
        nameserver = %config.scanner.default_nameserver,
        timeout_secs = config.scanner.timeout,
        workers = config.scanner.workers,
        record_type = %config.scanner.record_type,
        "Configuration loaded"
    );

    let services = ScanServices::build(&config)?;
    info!(resolver = services.resolver.name(), "Reading domains from stdin");

    let summary = services
        .dispatcher
        .run(BufReader::new(tokio::io::stdin()))
        .await;

    info!(
        domains = summary.domains_scanned,
        findings = summary.findings,
        "Scan complete"
    );

    Ok(())
}
