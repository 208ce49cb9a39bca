use super::deadline_layer::DeadlineResolver;
use super::dig::DigResolverClient;
use super::udp::UdpResolverClient;
use ns_takeover_application::ports::ResolverClient;
use ns_takeover_domain::config::{ResolverBackend, ScannerConfig};
use ns_takeover_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct ResolverBuilder {
    backend: ResolverBackend,
    dig_binary: String,
    timeout: Duration,
}

impl ResolverBuilder {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            backend: config.backend,
            dig_binary: config.dig_binary.clone(),
            timeout: Duration::from_secs(config.timeout),
        }
    }

    pub fn with_backend(mut self, backend: ResolverBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Build the configured backend wrapped in the deadline layer.
    ///
    /// Fails when the dig backend is selected and the binary is missing.
    pub fn build(self) -> Result<Arc<dyn ResolverClient>, DomainError> {
        let core: Arc<dyn ResolverClient> = match self.backend {
            ResolverBackend::Dig => Arc::new(DigResolverClient::new(&self.dig_binary)?),
            ResolverBackend::Udp => Arc::new(UdpResolverClient::new(self.timeout)),
        };

        info!(
            backend = %self.backend,
            timeout_secs = self.timeout.as_secs(),
            "Resolver client ready"
        );

        Ok(Arc::new(DeadlineResolver::new(core, self.timeout)))
    }
}
