//! Cache Entry Module
//!
//! Defines a single cache entry: an opaque payload stamped with its write time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its payload and creation time.
///
/// The payload is never interpreted by the cache. `created_at` is reset on
/// every write to the key and never on reads.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Bytes,
    /// Time of the last write to this key
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self::with_timestamp(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn with_timestamp(payload: Bytes, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how long ago the entry was written, measured at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Older Than ==
    /// Checks whether the entry's age at `now` is strictly greater than `max_age`.
    ///
    /// An entry whose age equals `max_age` exactly is kept.
    pub fn is_older_than(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }
}
