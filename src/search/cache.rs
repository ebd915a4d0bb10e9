use std::collections::HashMap;

/// Legal moves of one position and the move number it was stored at.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<M> {
    pub moves: Vec<M>,
    pub stale_at: u32,
}

/// Move lists keyed by position key.
///
/// No capacity limit: entries stored at move number `n` are dropped by the
/// first `purge_stale` past `n`, since play never returns to an earlier ply.
#[derive(Clone, Debug)]
pub struct PositionCache<M> {
    entries: HashMap<String, Entry<M>>,
}

impl<M> Default for PositionCache<M> {
    fn default() -> Self { Self { entries: HashMap::new() } }
}

impl<M> PositionCache<M> {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &str) -> Option<&Entry<M>> { self.entries.get(key) }

    pub fn insert(&mut self, key: String, moves: Vec<M>, stale_at: u32) {
        self.entries.insert(key, Entry { moves, stale_at });
    }

    /// Drops every entry with `stale_at < current`. Returns how many went.
    /// An entry stamped `current` survives: the search at that move number may still reach it.
    pub fn purge_stale(&mut self, current: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.stale_at >= current);
        let purged = before - self.entries.len();
        log::debug!("cache purge at move {}: removed {} of {}", current, purged, before);
        purged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<M>)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }
}
