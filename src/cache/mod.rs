//! Cache Module
//!
//! Provides an in-memory byte cache with TTL expiration driven by a
//! background reaper.

mod entry;
mod key;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::{SharedStore, TtlCache};
