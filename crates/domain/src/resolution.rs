/// What a nameserver answered to one query.
///
/// `status` is the textual response code (`NOERROR`, `SERVFAIL`, ...).
/// An empty status means the outcome is unknown and must never be read as
/// a passing answer. `records` keeps the order the server returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionOutcome {
    pub status: String,
    pub records: Vec<String>,
}

impl ResolutionOutcome {
    pub fn new(status: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            status: status.into(),
            records,
        }
    }

    /// Outcome used when the query could not be completed.
    pub fn inconclusive() -> Self {
        Self::default()
    }

    pub fn is_inconclusive(&self) -> bool {
        self.status.is_empty()
    }
}
