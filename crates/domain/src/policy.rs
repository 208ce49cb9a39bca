/// Response codes that indicate a dangling or misconfigured delegation.
///
/// Matching is exact and case-insensitive. Anything that is not an
/// affirmative match, including an empty status, is not vulnerable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityPolicy {
    statuses: Vec<String>,
}

pub const DEFAULT_VULNERABLE_STATUSES: [&str; 2] = ["SERVFAIL", "REFUSED"];

impl VulnerabilityPolicy {
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for status in statuses {
            let status = status.as_ref().trim().to_ascii_uppercase();
            if !status.is_empty() && !normalized.contains(&status) {
                normalized.push(status);
            }
        }

        Self {
            statuses: normalized,
        }
    }

    pub fn classify(&self, status: &str) -> bool {
        !status.is_empty()
            && self
                .statuses
                .iter()
                .any(|suspicious| suspicious.eq_ignore_ascii_case(status))
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }
}

impl Default for VulnerabilityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_VULNERABLE_STATUSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_flags_servfail_and_refused() {
        let policy = VulnerabilityPolicy::default();
        assert!(policy.classify("SERVFAIL"));
        assert!(policy.classify("REFUSED"));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let policy = VulnerabilityPolicy::default();
        assert!(policy.classify("servfail"));
        assert!(policy.classify("Refused"));
    }

    #[test]
    fn test_passing_and_unknown_statuses() {
        let policy = VulnerabilityPolicy::default();
        assert!(!policy.classify("NOERROR"));
        assert!(!policy.classify("NXDOMAIN"));
        assert!(!policy.classify(""));
    }

    #[test]
    fn test_no_substring_matching() {
        let policy = VulnerabilityPolicy::default();
        assert!(!policy.classify("SERVFAILED"));
        assert!(!policy.classify("REFUSED "));
        assert!(!policy.classify("FAIL"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = VulnerabilityPolicy::new(["nxdomain", " ", "NXDOMAIN"]);
        assert_eq!(policy.statuses(), &["NXDOMAIN".to_string()]);
        assert!(policy.classify("NXDOMAIN"));
        assert!(!policy.classify("SERVFAIL"));
    }

    #[test]
    fn test_empty_policy_never_matches() {
        let policy = VulnerabilityPolicy::new(Vec::<String>::new());
        assert!(!policy.classify("SERVFAIL"));
        assert!(!policy.classify(""));
    }
}
