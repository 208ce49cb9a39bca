//! Configuration module for ns-takeover
//!
//! - `root`: Main configuration, file loading and CLI overrides
//! - `scanner`: Resolver backend, seed nameserver, pool size, probe policy
//! - `output`: Finding label and format
//! - `logging`: Diagnostic log settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod root;
pub mod scanner;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
pub use scanner::{ResolverBackend, ScannerConfig};
