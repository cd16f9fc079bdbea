use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::debug;

use dns_pulse_domain::PendingKey;

/// Bounded store of in-flight queries, keyed by (flow, transaction id) and
/// holding each query's arrival time.
///
/// Capacity is enforced at insertion: a query observed while the store is
/// full is dropped rather than evicting an older pending entry. Hash maps
/// retain backing capacity after removals, so sustained churn is reclaimed
/// by rebuilding the map once enough entries have been removed.
pub(crate) struct PendingTable {
    entries: FxHashMap<PendingKey, Instant>,
    max_entries: usize,
    compaction_threshold: usize,
    removals: usize,
}

impl PendingTable {
    pub(crate) fn new(max_entries: usize, compaction_threshold: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            max_entries,
            compaction_threshold,
            removals: 0,
        }
    }

    /// Records a query's arrival. Returns `false` if the store is at
    /// capacity and the query was dropped. A duplicate query for an already
    /// pending key keeps the first arrival time.
    pub(crate) fn observe_query(&mut self, key: PendingKey, at: Instant) -> bool {
        if self.entries.len() >= self.max_entries {
            return false;
        }
        self.entries.entry(key).or_insert(at);
        true
    }

    /// Removes one pending entry, returning its arrival time.
    pub(crate) fn take(&mut self, key: &PendingKey) -> Option<Instant> {
        let at = self.entries.remove(key)?;
        self.removals += 1;
        Some(at)
    }

    /// Removes every entry that arrived before `cutoff` and returns its key.
    pub(crate) fn expire_older_than(&mut self, cutoff: Instant) -> Vec<PendingKey> {
        let expired: Vec<PendingKey> = self
            .entries
            .iter()
            .filter(|(_, &at)| at < cutoff)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            self.entries.remove(key);
        }
        self.removals += expired.len();
        expired
    }

    /// Rebuilds the backing storage once enough removals have accumulated,
    /// bounding retained capacity to the live entries.
    pub(crate) fn maybe_compact(&mut self) {
        if self.removals < self.compaction_threshold {
            return;
        }
        let survivors = std::mem::take(&mut self.entries);
        self.entries = survivors.into_iter().collect();
        self.removals = 0;
        debug!(live = self.entries.len(), "Rebuilt pending store backing storage");
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
