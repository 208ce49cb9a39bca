use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types the scanner can ask a nameserver for.
///
/// `NS` drives the delegation walk; the others are candidates for the final
/// probe against each authoritative server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum QueryType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    TXT,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::CNAME => "CNAME",
            QueryType::MX => "MX",
            QueryType::NS => "NS",
            QueryType::TXT => "TXT",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(QueryType::A),
            "AAAA" => Ok(QueryType::AAAA),
            "CNAME" => Ok(QueryType::CNAME),
            "MX" => Ok(QueryType::MX),
            "NS" => Ok(QueryType::NS),
            "TXT" => Ok(QueryType::TXT),
            _ => Err(DomainError::UnsupportedQueryType(s.to_string())),
        }
    }
}
