//! ns-takeover domain layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod finding;
pub mod name_server;
pub mod policy;
pub mod query_type;
pub mod resolution;
pub mod walk;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::Domain;
pub use errors::DomainError;
pub use finding::Finding;
pub use name_server::NameServer;
pub use policy::VulnerabilityPolicy;
pub use query_type::QueryType;
pub use resolution::ResolutionOutcome;
pub use walk::WalkResult;
