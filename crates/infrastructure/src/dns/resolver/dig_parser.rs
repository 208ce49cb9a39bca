use fancy_regex::Regex;
use ns_takeover_domain::{DomainError, QueryType};

/// `;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 4242`
const STATUS_PATTERN: &str = r",\s*status:\s+(?P<status>[^,\s]+)\s*,";

/// `example.com.  172800  IN  NS  a.iana-servers.net.`
const RECORD_PATTERN: &str =
    r"^(?P<owner>\S+)\s+(?P<ttl>\d+)\s+(?:(?P<class>IN|CH|HS)\s+)?(?P<rtype>[A-Z0-9]+)\s+(?P<value>.+?)\s*$";

/// Values scraped from one run of `dig`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigOutput {
    pub status: Option<String>,
    pub records: Vec<String>,
}

/// Extracts the header status and the records of one type from the text
/// `dig +noall +comments +answer +authority` prints.
pub struct DigOutputParser {
    status: Regex,
    record: Regex,
}

impl DigOutputParser {
    pub fn new() -> Result<Self, DomainError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                DomainError::ResolverUnavailable(format!("invalid dig output pattern: {}", e))
            })
        };

        Ok(Self {
            status: compile(STATUS_PATTERN)?,
            record: compile(RECORD_PATTERN)?,
        })
    }

    pub fn parse(&self, stdout: &str, query_type: QueryType) -> DigOutput {
        let mut output = DigOutput::default();

        for line in stdout.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(';') {
                if let Ok(Some(caps)) = self.status.captures(line) {
                    if let Some(status) = caps.name("status") {
                        output.status = Some(status.as_str().to_string());
                    }
                }
                continue;
            }

            if let Ok(Some(caps)) = self.record.captures(line) {
                let matches_type = caps
                    .name("rtype")
                    .is_some_and(|rtype| rtype.as_str() == query_type.as_str());

                if let (true, Some(value)) = (matches_type, caps.name("value")) {
                    output.records.push(value.as_str().to_string());
                }
            }
        }

        output
    }
}
