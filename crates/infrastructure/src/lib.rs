//! ns-takeover infrastructure layer
//!
//! Resolver adapters behind the `ResolverClient` port and finding sinks
//! behind the `FindingSink` port.
pub mod dns;
pub mod output;
