use ns_takeover_application::ports::{FindingSink, ResolverClient};
use ns_takeover_application::services::ScanDispatcher;
use ns_takeover_application::use_cases::{ScanDomainUseCase, WalkDelegationUseCase};
use ns_takeover_domain::Config;
use ns_takeover_infrastructure::dns::ResolverBuilder;
use ns_takeover_infrastructure::output::StdoutFindingSink;
use std::sync::Arc;
use tracing::error;

/// Everything a scan run needs, wired from one validated `Config`.
pub struct ScanServices {
    pub resolver: Arc<dyn ResolverClient>,
    pub dispatcher: ScanDispatcher,
}

impl ScanServices {
    /// Fails before any input is read when the resolver backend is unusable.
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let resolver = ResolverBuilder::new(&config.scanner).build().map_err(|e| {
            error!(error = %e, "Resolver backend unavailable");
            anyhow::anyhow!(e)
        })?;

        let walker = WalkDelegationUseCase::new(resolver.clone(), config.scanner.seed_nameserver());
        let scanner = Arc::new(ScanDomainUseCase::new(
            walker,
            resolver.clone(),
            config.scanner.record_type,
            config.scanner.policy(),
        ));

        let sink: Arc<dyn FindingSink> = Arc::new(StdoutFindingSink::stdout(&config.output));
        let dispatcher = ScanDispatcher::new(scanner, sink, config.scanner.workers);

        Ok(Self {
            resolver,
            dispatcher,
        })
    }
}
