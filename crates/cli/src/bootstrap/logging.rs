use ns_takeover_domain::config::LoggingConfig;
use ns_takeover_domain::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. In quiet mode nothing is installed, so
/// every diagnostic event is discarded and stdout carries findings only.
pub fn init_logging(config: &Config) {
    let Some(filter) = log_filter(&config.logging) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(false)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}

/// `None` when diagnostics are suppressed. `RUST_LOG` takes precedence over
/// the configured level, and an unparseable level falls back to `info`.
fn log_filter(logging: &LoggingConfig) -> Option<EnvFilter> {
    if logging.quiet {
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    Some(filter)
}
