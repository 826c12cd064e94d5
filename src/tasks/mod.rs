//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: sweeps entries older than the TTL once per TTL interval

mod reaper;

pub use reaper::{spawn_reaper, Reaper, MIN_SWEEP_INTERVAL};
