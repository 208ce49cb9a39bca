use super::walk_delegation::WalkDelegationUseCase;
use crate::ports::{resolve_or_inconclusive, ResolverClient};
use ns_takeover_domain::{Domain, Finding, QueryType, VulnerabilityPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Probes every authoritative nameserver of a domain for a takeover signal.
///
/// Candidates are the final-level servers followed by the previous-level
/// servers of the delegation walk. Each candidate is queried once for the
/// target record type, duplicates included, and every status the policy
/// flags becomes a finding. One finding does not stop the remaining probes.
pub struct ScanDomainUseCase {
    walker: WalkDelegationUseCase,
    resolver: Arc<dyn ResolverClient>,
    target_type: QueryType,
    policy: VulnerabilityPolicy,
}

impl ScanDomainUseCase {
    pub fn new(
        walker: WalkDelegationUseCase,
        resolver: Arc<dyn ResolverClient>,
        target_type: QueryType,
        policy: VulnerabilityPolicy,
    ) -> Self {
        Self {
            walker,
            resolver,
            target_type,
            policy,
        }
    }

    pub async fn execute(&self, domain: &Domain) -> Vec<Finding> {
        let walk = self.walker.execute(domain).await;
        let mut findings = Vec::new();

        for nameserver in walk.candidates() {
            debug!(domain = %domain, nameserver = %nameserver, "Checking nameserver for takeover");

            let outcome = resolve_or_inconclusive(
                self.resolver.as_ref(),
                domain.as_str(),
                nameserver,
                self.target_type,
            )
            .await;

            if outcome.is_inconclusive() {
                debug!(domain = %domain, nameserver = %nameserver, "Probe inconclusive");
                continue;
            }

            debug!(
                domain = %domain,
                nameserver = %nameserver,
                status = %outcome.status,
                records = ?outcome.records,
                "Probe answered"
            );

            if self.policy.classify(&outcome.status) {
                info!(domain = %domain, nameserver = %nameserver, status = %outcome.status, "Vulnerable status");
                findings.push(Finding::new(
                    domain.clone(),
                    nameserver.clone(),
                    outcome.status,
                ));
            }
        }

        findings
    }
}
