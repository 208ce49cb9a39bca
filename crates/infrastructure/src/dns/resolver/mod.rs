//! Resolver clients
//!
//! Backends that actually talk to nameservers, and a decorator on top:
//!
//! - **Deadline**: per-query timeout (outermost)
//! - **Dig**: runs the external `dig` tool and scrapes its output
//! - **Udp**: builds and sends DNS messages itself
//!
//! ## Example Usage
//!
//! ```no_run
//! use ns_takeover_domain::config::ScannerConfig;
//! use ns_takeover_infrastructure::dns::resolver::ResolverBuilder;
//!
//! let resolver = ResolverBuilder::new(&ScannerConfig::default()).build()?;
//! # Ok::<(), ns_takeover_domain::DomainError>(())
//! ```

pub mod builder;
pub mod deadline_layer;
pub mod dig;
pub mod dig_parser;
pub mod udp;

pub use builder::ResolverBuilder;
pub use deadline_layer::DeadlineResolver;
pub use dig::DigResolverClient;
pub use dig_parser::{DigOutput, DigOutputParser};
pub use udp::UdpResolverClient;
