//! Pokecache - A thread-safe in-memory byte cache with TTL expiry
//!
//! Entries are opaque payloads keyed by string. A background reaper wakes
//! once per TTL and evicts entries older than the TTL.
//!
//! The reaper is a Tokio task. [`TtlCache::new`] spawns it on the current
//! runtime and panics outside one; [`TtlCache::new_in`] takes an explicit
//! runtime handle and works from any thread.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheKey, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::Reaper;
