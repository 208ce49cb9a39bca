#![allow(dead_code)]

use async_trait::async_trait;
use ns_takeover_application::ports::{FindingSink, ResolverClient};
use ns_takeover_domain::{DomainError, Finding, NameServer, QueryType, ResolutionOutcome};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock ResolverClient
// ============================================================================

type Key = (String, String, QueryType);

/// Resolver answering from a fixed table keyed by (domain, nameserver, type).
///
/// Unknown keys answer `NOERROR` with no records. Every call is recorded.
#[derive(Clone, Default)]
pub struct ScriptedResolver {
    responses: Arc<Mutex<HashMap<Key, Result<ResolutionOutcome, DomainError>>>>,
    calls: Arc<Mutex<Vec<Key>>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        self,
        domain: &str,
        nameserver: &str,
        query_type: QueryType,
        status: &str,
        records: &[&str],
    ) -> Self {
        let outcome = ResolutionOutcome::new(
            status,
            records.iter().map(|r| r.to_string()).collect(),
        );
        self.responses.lock().unwrap().insert(
            (domain.to_string(), nameserver.to_string(), query_type),
            Ok(outcome),
        );
        self
    }

    pub fn ns(self, domain: &str, nameserver: &str, records: &[&str]) -> Self {
        self.on(domain, nameserver, QueryType::NS, "NOERROR", records)
    }

    pub fn a(self, domain: &str, nameserver: &str, status: &str) -> Self {
        self.on(domain, nameserver, QueryType::A, status, &[])
    }

    pub fn fail(self, domain: &str, nameserver: &str, query_type: QueryType) -> Self {
        self.responses.lock().unwrap().insert(
            (domain.to_string(), nameserver.to_string(), query_type),
            Err(DomainError::Transport {
                server: nameserver.to_string(),
                reason: "mock failure".to_string(),
            }),
        );
        self
    }

    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, query_type: QueryType) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter(|(_, _, qt)| *qt == query_type)
            .map(|(d, ns, _)| (d, ns))
            .collect()
    }
}

#[async_trait]
impl ResolverClient for ScriptedResolver {
    async fn query(
        &self,
        domain: &str,
        nameserver: &NameServer,
        query_type: QueryType,
    ) -> Result<ResolutionOutcome, DomainError> {
        let key = (domain.to_string(), nameserver.to_string(), query_type);
        self.calls.lock().unwrap().push(key.clone());

        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(ResolutionOutcome::new("NOERROR", vec![])))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Delegation for `sub.example.com` that is intact at every level.
pub fn intact_chain() -> ScriptedResolver {
    ScriptedResolver::new()
        .ns("com", "8.8.8.8", &["a.gtld-servers.net.", "b.gtld-servers.net."])
        .ns(
            "example.com",
            "a.gtld-servers.net",
            &["ns1.example.com.", "ns2.example.com."],
        )
        .ns(
            "sub.example.com",
            "ns1.example.com",
            &["ns1.sub-host.net.", "ns2.sub-host.net."],
        )
}

// ============================================================================
// In-memory FindingSink
// ============================================================================

#[derive(Default)]
pub struct MemorySink {
    findings: Mutex<Vec<Finding>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.findings.lock().unwrap().clone()
    }

    pub fn rendered_sorted(&self, label: &str) -> Vec<String> {
        let mut lines: Vec<String> = self.findings().iter().map(|f| f.render(label)).collect();
        lines.sort();
        lines
    }
}

impl FindingSink for MemorySink {
    fn emit(&self, finding: &Finding) {
        self.findings.lock().unwrap().push(finding.clone());
    }
}
