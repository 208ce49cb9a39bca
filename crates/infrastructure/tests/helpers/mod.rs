#![allow(dead_code)]

pub mod dns_server_mock;
#[cfg(unix)]
pub mod fake_dig;

