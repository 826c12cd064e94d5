//! Configuration Module
//!
//! Handles loading cache and server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default entry lifetime and sweep interval in milliseconds.
pub const DEFAULT_TTL_MS: u64 = 5_000;
/// Default HTTP server port.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entry TTL in milliseconds; also the reaper's sweep interval
    pub ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config from environment variables.
    ///
    /// Unset variables take their defaults; set but unparsable values are
    /// rejected with [`CacheError::InvalidConfig`].
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            ttl_ms: parse_var("CACHE_TTL_MS", env::var("CACHE_TTL_MS").ok())?
                .unwrap_or(DEFAULT_TTL_MS),
            server_port: parse_var("SERVER_PORT", env::var("SERVER_PORT").ok())?
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidConfig(format!("{}={:?}", name, value))),
    }
}
