use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Nameserver identifier (hostname or IP literal).
///
/// A single trailing root separator is stripped on construction, so
/// `ns1.example.com.` and `ns1.example.com` are the same server. Comparison
/// is literal: case is not folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NameServer(Arc<str>);

impl NameServer {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name.strip_suffix('.').unwrap_or(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identifier cannot be queried.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NameServer {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NameServer {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<NameServer> for String {
    fn from(ns: NameServer) -> Self {
        ns.0.to_string()
    }
}
