use crate::NameServer;

/// Nameserver sets produced by walking a domain's delegation chain.
///
/// When the walk reached the most specific level, `final_name_servers` is the
/// NS set of the full domain and `previous_level_name_servers` the set one
/// level up. When it stopped early, `final_name_servers` is empty and
/// `previous_level_name_servers` is the last non-empty set observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    pub final_name_servers: Vec<NameServer>,
    pub previous_level_name_servers: Vec<NameServer>,
    /// Number of levels whose NS set was queried.
    pub levels_resolved: usize,
}

impl WalkResult {
    /// Final-level servers first, then the previous level. Duplicates are kept.
    pub fn candidates(&self) -> impl Iterator<Item = &NameServer> {
        self.final_name_servers
            .iter()
            .chain(self.previous_level_name_servers.iter())
    }

    pub fn candidate_count(&self) -> usize {
        self.final_name_servers.len() + self.previous_level_name_servers.len()
    }

    pub fn halted_early(&self) -> bool {
        self.final_name_servers.is_empty()
    }
}
