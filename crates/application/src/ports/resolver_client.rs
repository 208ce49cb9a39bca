use async_trait::async_trait;
use ns_takeover_domain::{DomainError, NameServer, QueryType, ResolutionOutcome};
use tracing::{debug, warn};

/// Sends one query of `query_type` for `domain` to `nameserver`.
///
/// `Ok` means the server produced a response that could be read, whatever
/// its status. Transport problems (spawn failures, timeouts, unreadable
/// output) are reported as `Err` so callers never have to infer failure
/// from a missing status.
#[async_trait]
pub trait ResolverClient: Send + Sync {
    async fn query(
        &self,
        domain: &str,
        nameserver: &NameServer,
        query_type: QueryType,
    ) -> Result<ResolutionOutcome, DomainError>;

    fn name(&self) -> &'static str;
}

/// Runs a query and folds every failure into an inconclusive outcome.
///
/// An empty nameserver is never queried.
pub async fn resolve_or_inconclusive(
    resolver: &dyn ResolverClient,
    domain: &str,
    nameserver: &NameServer,
    query_type: QueryType,
) -> ResolutionOutcome {
    if nameserver.is_empty() {
        debug!(domain = %domain, "Skipping query with empty nameserver");
        return ResolutionOutcome::inconclusive();
    }

    debug!(
        domain = %domain,
        nameserver = %nameserver,
        query_type = %query_type,
        resolver = resolver.name(),
        "Performing query"
    );

    match resolver.query(domain, nameserver, query_type).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(
                domain = %domain,
                nameserver = %nameserver,
                query_type = %query_type,
                error = %e,
                "Query failed, treating as inconclusive"
            );
            ResolutionOutcome::inconclusive()
        }
    }
}
