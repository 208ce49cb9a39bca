pub mod finding_sink;
pub mod resolver_client;

pub use finding_sink::FindingSink;
pub use resolver_client::{resolve_or_inconclusive, ResolverClient};
