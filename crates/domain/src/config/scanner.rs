use crate::policy::DEFAULT_VULNERABLE_STATUSES;
use crate::{NameServer, QueryType, VulnerabilityPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How queries reach the nameservers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Shell out to the `dig` binary
    #[default]
    Dig,
    /// Build and send DNS messages over UDP directly
    Udp,
}

impl FromStr for ResolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dig" => Ok(ResolverBackend::Dig),
            "udp" => Ok(ResolverBackend::Udp),
            other => Err(format!("unknown resolver backend '{}'", other)),
        }
    }
}

impl fmt::Display for ResolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverBackend::Dig => f.write_str("dig"),
            ResolverBackend::Udp => f.write_str("udp"),
        }
    }
}

/// Scanner configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerConfig {
    #[serde(default)]
    pub backend: ResolverBackend,

    /// Path to the `dig` binary (dig backend only)
    #[serde(default = "default_dig_binary")]
    pub dig_binary: String,

    /// Nameserver used to resolve the first (TLD) level
    #[serde(default = "default_nameserver")]
    pub default_nameserver: String,

    /// Deadline for a single query, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Number of concurrent workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Record type probed against every authoritative nameserver
    #[serde(default = "default_record_type")]
    pub record_type: QueryType,

    /// Response codes reported as findings
    #[serde(default = "default_vulnerable_statuses")]
    pub vulnerable_statuses: Vec<String>,
}

impl ScannerConfig {
    pub fn policy(&self) -> VulnerabilityPolicy {
        VulnerabilityPolicy::new(&self.vulnerable_statuses)
    }

    pub fn seed_nameserver(&self) -> NameServer {
        NameServer::new(&self.default_nameserver)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            backend: ResolverBackend::default(),
            dig_binary: default_dig_binary(),
            default_nameserver: default_nameserver(),
            timeout: default_timeout(),
            workers: default_workers(),
            record_type: default_record_type(),
            vulnerable_statuses: default_vulnerable_statuses(),
        }
    }
}

fn default_dig_binary() -> String {
    "/usr/bin/dig".to_string()
}

fn default_nameserver() -> String {
    "8.8.8.8".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_workers() -> usize {
    30
}

fn default_record_type() -> QueryType {
    QueryType::A
}

fn default_vulnerable_statuses() -> Vec<String> {
    DEFAULT_VULNERABLE_STATUSES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
