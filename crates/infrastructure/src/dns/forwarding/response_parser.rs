use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use ns_takeover_domain::{DomainError, QueryType};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Values of the requested type, answer section first. For NS queries
    /// the authority section is included as well, since a parent zone
    /// answers with a referral rather than an answer.
    pub records: Vec<String>,
}

impl DnsResponse {
    pub fn status(&self) -> &'static str {
        ResponseParser::rcode_to_status(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8], query_type: QueryType) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let wanted = RecordTypeMapper::to_hickory(query_type);
        let mut records: Vec<String> = message
            .answers()
            .iter()
            .filter(|r| r.record_type() == wanted)
            .filter_map(Self::record_value)
            .collect();

        if query_type == QueryType::NS {
            records.extend(
                message
                    .name_servers()
                    .iter()
                    .filter(|r| r.record_type() == wanted)
                    .filter_map(Self::record_value),
            );
        }

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            records,
        };

        debug!(
            rcode = ?response.rcode,
            records = response.records.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    fn record_value(record: &Record) -> Option<String> {
        match record.data() {
            RData::A(a) => Some(a.0.to_string()),
            RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
            RData::NS(ns) => Some(ns.0.to_utf8()),
            RData::CNAME(canonical) => Some(canonical.0.to_utf8()),
            RData::MX(mx) => Some(mx.exchange().to_utf8()),
            RData::TXT(txt) => Some(txt.to_string()),
            _ => None,
        }
    }

    /// Textual response code as printed in a `dig` header.
    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            _ => "UNKNOWN",
        }
    }
}
