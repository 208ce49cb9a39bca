use async_trait::async_trait;
use ns_takeover_application::ports::ResolverClient;
use ns_takeover_domain::{DomainError, NameServer, QueryType, ResolutionOutcome};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Deadline decorator for a resolver client
///
/// Wraps another client and abandons any query that runs longer than the
/// configured timeout. The inner future is dropped on expiry, which kills a
/// running `dig` child process.
pub struct DeadlineResolver {
    inner: Arc<dyn ResolverClient>,
    timeout: Duration,
}

impl DeadlineResolver {
    pub fn new(inner: Arc<dyn ResolverClient>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl ResolverClient for DeadlineResolver {
    async fn query(
        &self,
        domain: &str,
        nameserver: &NameServer,
        query_type: QueryType,
    ) -> Result<ResolutionOutcome, DomainError> {
        match tokio::time::timeout(self.timeout, self.inner.query(domain, nameserver, query_type))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                debug!(
                    domain = %domain,
                    nameserver = %nameserver,
                    timeout_secs = self.timeout.as_secs(),
                    "Query deadline exceeded"
                );
                Err(DomainError::QueryTimeout(self.timeout.as_secs()))
            }
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
