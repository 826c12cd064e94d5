//! Cache Store Module
//!
//! Unsynchronized storage engine: a HashMap of entries plus activity counters.
//! Thread safety is provided by the owner (see [`crate::cache::TtlCache`]).

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to payload storage with write timestamps.
///
/// Entries are only ever removed by [`CacheStore::sweep`] or replaced by
/// [`CacheStore::add`]. Lookups never check age; that is the reaper's job.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current time.
    ///
    /// An existing entry is fully replaced and its age clock restarts.
    pub fn add(&mut self, key: impl Into<String>, payload: Bytes) {
        self.add_at(key, payload, Instant::now());
    }

    /// Stores a payload with an explicit write time.
    pub fn add_at(&mut self, key: impl Into<String>, payload: Bytes, now: Instant) {
        self.entries
            .insert(key.into(), CacheEntry::with_timestamp(payload, now));
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Does not touch the entry's timestamp.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age at `now` is strictly greater than `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_older_than(max_age, now));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
