use crate::ports::{resolve_or_inconclusive, ResolverClient};
use ns_takeover_domain::{Domain, NameServer, QueryType, WalkResult};
use std::sync::Arc;
use tracing::debug;

/// Walks a domain's delegation chain from the TLD down to the full name.
///
/// At every level the NS set is re-resolved against the first server of the
/// level above (the configured seed nameserver for the TLD), because
/// authority can be delegated again further down. The walk stops at the most
/// specific level or at the first level that yields no NS records.
pub struct WalkDelegationUseCase {
    resolver: Arc<dyn ResolverClient>,
    seed_nameserver: NameServer,
}

impl WalkDelegationUseCase {
    pub fn new(resolver: Arc<dyn ResolverClient>, seed_nameserver: NameServer) -> Self {
        Self {
            resolver,
            seed_nameserver,
        }
    }

    pub async fn execute(&self, domain: &Domain) -> WalkResult {
        let mut active = self.seed_nameserver.clone();
        let mut previous: Vec<NameServer> = Vec::new();
        let mut current: Vec<NameServer> = Vec::new();
        let mut levels_resolved = 0;

        for (level, suffix) in domain.levels().enumerate() {
            previous = std::mem::take(&mut current);

            let outcome =
                resolve_or_inconclusive(self.resolver.as_ref(), suffix, &active, QueryType::NS)
                    .await;
            levels_resolved += 1;

            current = outcome
                .records
                .iter()
                .map(|record| NameServer::new(record))
                .collect();

            debug!(
                level,
                suffix = %suffix,
                via = %active,
                status = %outcome.status,
                nameservers = ?current,
                "Resolved delegation level"
            );

            match current.first() {
                Some(next) => active = next.clone(),
                None => break,
            }
        }

        let result = WalkResult {
            final_name_servers: current,
            previous_level_name_servers: previous,
            levels_resolved,
        };

        debug!(
            domain = %domain,
            levels_resolved,
            halted_early = result.halted_early(),
            candidates = result.candidate_count(),
            final_nameservers = ?result.final_name_servers,
            previous_nameservers = ?result.previous_level_name_servers,
            "Delegation walk finished"
        );

        result
    }
}
