use crate::{Domain, NameServer};
use serde::Serialize;

/// One nameserver that answered a probe for `domain` with a suspicious status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    #[serde(serialize_with = "serialize_domain")]
    pub domain: Domain,
    pub nameserver: NameServer,
    pub status: String,
}

impl Finding {
    pub fn new(domain: Domain, nameserver: NameServer, status: impl Into<String>) -> Self {
        Self {
            domain,
            nameserver,
            status: status.into(),
        }
    }

    /// `[<label>] domain: <domain>, ns: <nameserver>, status: <status>`
    pub fn render(&self, label: &str) -> String {
        format!(
            "[{}] domain: {}, ns: {}, status: {}",
            label, self.domain, self.nameserver, self.status
        )
    }
}

fn serialize_domain<S: serde::Serializer>(domain: &Domain, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(domain.as_str())
}
