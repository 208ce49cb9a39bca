use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use ns_takeover_application::ports::ResolverClient;
use ns_takeover_domain::{DomainError, NameServer, QueryType, ResolutionOutcome};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

const DNS_PORT: u16 = 53;

/// Queries nameservers directly over UDP, without any external tool.
///
/// Nameserver hostnames are turned into addresses through the system
/// resolver; IP literals are used as-is.
pub struct UdpResolverClient {
    port: u16,
    timeout: Duration,
}

impl UdpResolverClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            port: DNS_PORT,
            timeout,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    async fn server_addr(&self, nameserver: &NameServer) -> Result<SocketAddr, DomainError> {
        if let Ok(ip) = nameserver.as_str().parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let mut addrs = tokio::net::lookup_host((nameserver.as_str(), self.port))
            .await
            .map_err(|e| DomainError::Transport {
                server: nameserver.to_string(),
                reason: format!("cannot resolve nameserver address: {}", e),
            })?;

        addrs.next().ok_or_else(|| DomainError::Transport {
            server: nameserver.to_string(),
            reason: "nameserver has no address".to_string(),
        })
    }
}

#[async_trait]
impl ResolverClient for UdpResolverClient {
    async fn query(
        &self,
        domain: &str,
        nameserver: &NameServer,
        query_type: QueryType,
    ) -> Result<ResolutionOutcome, DomainError> {
        let server_addr = self.server_addr(nameserver).await?;
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, query_type)?;

        let transport = UdpTransport::new(server_addr);
        let response = transport.send(&query_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response, query_type)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                parsed.id, id
            )));
        }

        if parsed.truncated {
            warn!(domain = %domain, nameserver = %nameserver, "Truncated UDP response, records may be incomplete");
        }

        debug!(
            domain = %domain,
            nameserver = %nameserver,
            server = %server_addr,
            status = parsed.status(),
            records = ?parsed.records,
            "Query answered"
        );

        Ok(ResolutionOutcome::new(parsed.status(), parsed.records))
    }

    fn name(&self) -> &'static str {
        "udp"
    }
}
