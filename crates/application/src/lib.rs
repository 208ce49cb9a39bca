//! ns-takeover application layer
//!
//! Ports to the outside world and the use cases that walk a delegation
//! chain, probe the authoritative nameservers and fan the work out over a
//! worker pool.
pub mod ports;
pub mod services;
pub mod use_cases;
