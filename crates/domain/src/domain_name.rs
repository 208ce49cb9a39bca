use std::fmt;
use std::sync::Arc;

/// A dotted domain name as read from the input, e.g. `www.msn.com`.
///
/// Levels are counted from the root: level 0 is the rightmost label (the
/// TLD) and each following level adds one label to the left. No syntax
/// validation is performed, so an empty string is a single empty level.
/// Uses `Arc<str>` so the name can be handed to findings without copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: Arc<str>,
}

impl Domain {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Number of dot-separated labels. Always at least 1.
    pub fn count_levels(&self) -> usize {
        self.name.matches('.').count() + 1
    }

    /// Suffix made of the last `level + 1` labels.
    ///
    /// `level_suffix(0)` of `www.msn.com` is `com`, `level_suffix(2)` is the
    /// full name. Returns `None` when `level` is past the most specific level.
    pub fn level_suffix(&self, level: usize) -> Option<&str> {
        match self.name.rmatch_indices('.').nth(level) {
            Some((idx, _)) => Some(&self.name[idx + 1..]),
            None if level + 1 == self.count_levels() => Some(&self.name),
            None => None,
        }
    }

    /// Every suffix from the TLD down to the full name.
    pub fn levels(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.count_levels()).filter_map(move |level| self.level_suffix(level))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
