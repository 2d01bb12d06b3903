use std::collections::HashSet;

use super::detector::MatchKey;

/// Pairings that have already been celebrated.
///
/// The marketplace keeps reporting a match on every poll for as long as the
/// records exist, so without this set the same pairing would re-trigger a
/// celebration every interval once the previous one finished. Held by the
/// poll loop, never shared, and deliberately unbounded: entries are tiny
/// and the set resets with the process.
#[derive(Debug, Default)]
pub struct CelebratedMatches {
    seen: HashSet<MatchKey>,
}

impl CelebratedMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &MatchKey) -> bool {
        self.seen.contains(key)
    }

    /// Record a celebrated pairing. Returns `false` if it was already known.
    pub fn record(&mut self, key: MatchKey) -> bool {
        self.seen.insert(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
