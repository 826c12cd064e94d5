//! Response DTOs for the cache front-end
//!
//! JSON bodies for everything except cache hits, which return the raw payload.

use std::time::Duration;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for a successful write (PUT /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The key that was written
    pub key: String,
    /// Payload size in bytes
    pub size: usize,
}

impl AddResponse {
    pub fn new(key: impl Into<String>, size: usize) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached ({} bytes)", key, size),
            key,
            size,
        }
    }
}

/// Response body for a cache miss (GET /cache/:key)
///
/// A miss is a normal outcome; the 404 status only tells the caller to fetch
/// and populate.
#[derive(Debug, Clone, Serialize)]
pub struct MissResponse {
    /// Always "miss"
    pub status: String,
    /// The key that was looked up
    pub key: String,
}

impl MissResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            status: "miss".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of writes
    pub writes: u64,
    /// Number of entries removed by the reaper
    pub reaped: u64,
    /// Number of completed reaper sweeps
    pub sweeps: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured TTL in milliseconds
    pub ttl_ms: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl: Duration) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            writes: stats.writes,
            reaped: stats.reaped,
            sweeps: stats.sweeps,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
