use ns_takeover_domain::Finding;

/// Destination for findings.
///
/// Called concurrently from every worker. Implementations must write each
/// finding as one complete unit so lines from different workers never
/// interleave.
pub trait FindingSink: Send + Sync {
    fn emit(&self, finding: &Finding);
}
