use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported query type: {0}")]
    UnsupportedQueryType(String),

    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Query timeout after {0}s")]
    QueryTimeout(u64),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
