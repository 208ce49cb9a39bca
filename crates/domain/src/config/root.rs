use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::scanner::{ResolverBackend, ScannerConfig};
use crate::QueryType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration.
///
/// Built once at startup from defaults, an optional TOML file and CLI
/// overrides (in that order of precedence), then shared read-only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line. `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub backend: Option<ResolverBackend>,
    pub dig_binary: Option<String>,
    pub default_nameserver: Option<String>,
    pub timeout: Option<u64>,
    pub workers: Option<usize>,
    pub record_type: Option<QueryType>,
    pub vulnerable_statuses: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
    pub label: Option<String>,
    pub log_level: Option<String>,
    pub quiet: bool,
}

impl Config {
    /// Load configuration from an optional file and apply CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(backend) = overrides.backend {
            self.scanner.backend = backend;
        }
        if let Some(dig_binary) = overrides.dig_binary {
            self.scanner.dig_binary = dig_binary;
        }
        if let Some(nameserver) = overrides.default_nameserver {
            self.scanner.default_nameserver = nameserver;
        }
        if let Some(timeout) = overrides.timeout {
            self.scanner.timeout = timeout;
        }
        if let Some(workers) = overrides.workers {
            self.scanner.workers = workers;
        }
        if let Some(record_type) = overrides.record_type {
            self.scanner.record_type = record_type;
        }
        if let Some(statuses) = overrides.vulnerable_statuses {
            self.scanner.vulnerable_statuses = statuses;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(label) = overrides.label {
            self.output.label = label;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.quiet {
            self.logging.quiet = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.workers == 0 {
            return Err(ConfigError::Validation(
                "scanner.workers must be at least 1".to_string(),
            ));
        }
        if self.scanner.timeout == 0 {
            return Err(ConfigError::Validation(
                "scanner.timeout must be at least 1 second".to_string(),
            ));
        }
        if self.scanner.seed_nameserver().is_empty() {
            return Err(ConfigError::Validation(
                "scanner.default_nameserver cannot be empty".to_string(),
            ));
        }
        if self.scanner.policy().statuses().is_empty() {
            return Err(ConfigError::Validation(
                "scanner.vulnerable_statuses cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
