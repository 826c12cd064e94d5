//! TTL Cache Module
//!
//! Thread-safe handle over [`CacheStore`] with a background reaper that
//! evicts entries once they outlive the configured TTL.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::Reaper;

/// Store shared between cache handles and the reaper task.
pub type SharedStore = Arc<Mutex<CacheStore>>;

// == TTL Cache ==
/// In-memory key to byte-payload cache with time-based eviction.
///
/// Cloning is cheap; all clones share the same store. Every operation takes
/// the single store lock for its whole duration, so operations on one key
/// are linearized with each other and with reaper sweeps.
///
/// Expiry is driven only by the reaper, which wakes every `ttl` and removes
/// entries older than `ttl`. An entry therefore lives at least `ttl` and is
/// gone before roughly `2 * ttl`. Reads never extend an entry's life.
#[derive(Debug, Clone)]
pub struct TtlCache {
    store: SharedStore,
    ttl: Duration,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper runs until the last clone of the cache is dropped or
    /// [`Reaper::shutdown`] is called. Dropping the returned [`Reaper`]
    /// detaches it without stopping eviction.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime, like `tokio::spawn`.
    /// Use [`TtlCache::new_in`] from other threads.
    pub fn new(ttl: Duration) -> (Self, Reaper) {
        let cache = Self::empty(ttl);
        let reaper = Reaper::spawn(cache.store.clone(), ttl);
        (cache, reaper)
    }

    /// Creates an empty cache whose reaper runs on the given runtime.
    ///
    /// Never panics, whether or not the calling thread is inside a runtime.
    pub fn new_in(ttl: Duration, runtime: &Handle) -> (Self, Reaper) {
        let cache = Self::empty(ttl);
        let reaper = Reaper::spawn_on(cache.store.clone(), ttl, runtime);
        (cache, reaper)
    }

    fn empty(ttl: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new())),
            ttl,
        }
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a cache miss.
    ///
    /// A miss means the key was never added or has already been reaped.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().get(key)
    }

    // == Add ==
    /// Inserts or replaces the payload under `key` and restarts its expiry clock.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let payload = payload.into();
        self.store.lock().add(key, payload);
    }

    // == Read Through ==
    /// Returns the cached payload for `key`, or runs `fetch` and caches its result.
    ///
    /// The lock is not held while `fetch` runs, so two concurrent misses on
    /// the same key may both fetch; the later write wins. Fetch errors are
    /// returned as-is and nothing is cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Bytes, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Bytes, E>>,
    {
        if let Some(payload) = self.get(key) {
            return Ok(payload);
        }

        debug!(key, "cache miss, fetching");
        let payload = fetch().await?;
        self.add(key, payload.clone());
        Ok(payload)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    const TTL: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_add_then_get() {
        let (cache, _reaper) = TtlCache::new(TTL);

        let body = br#"{"count": 20, "next": "https://pokeapi.co/api/v2/location-area?offset=20"}"#;
        cache.add("location_areas_0", Bytes::from_static(body));

        assert_eq!(cache.get("location_areas_0").as_deref(), Some(&body[..]));
    }

    #[tokio::test]
    async fn test_get_never_added() {
        let (cache, _reaper) = TtlCache::new(TTL);

        assert_eq!(cache.get("location_areas_7"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_overwrite_last_write_wins() {
        let (cache, _reaper) = TtlCache::new(TTL);

        cache.add("pokemon_pikachu", b"first".to_vec());
        cache.add("pokemon_pikachu", b"second".to_vec());

        assert_eq!(cache.get("pokemon_pikachu"), Some(Bytes::from_static(b"second")));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let (cache, _reaper) = TtlCache::new(TTL);
        let other = cache.clone();

        other.add("shared", "value");

        assert_eq!(cache.get("shared"), Some(Bytes::from_static(b"value")));
    }

    #[tokio::test]
    async fn test_get_or_fetch_populates_on_miss() {
        let (cache, _reaper) = TtlCache::new(TTL);

        let fetched = cache
            .get_or_fetch("pokemon_eevee", || async {
                Ok::<_, Infallible>(Bytes::from_static(b"eevee"))
            })
            .await
            .unwrap();
        assert_eq!(fetched, Bytes::from_static(b"eevee"));

        // Second call must be served from the cache
        let cached = cache
            .get_or_fetch("pokemon_eevee", || async {
                Err::<Bytes, _>("fetch should not run on a hit")
            })
            .await
            .unwrap();
        assert_eq!(cached, Bytes::from_static(b"eevee"));
    }

    #[tokio::test]
    async fn test_get_or_fetch_error_caches_nothing() {
        let (cache, _reaper) = TtlCache::new(TTL);

        let result = cache
            .get_or_fetch("pokemon_missingno", || async { Err::<Bytes, _>("not found") })
            .await;

        assert_eq!(result, Err("not found"));
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_cache_stops_reaper() {
        let (cache, reaper) = TtlCache::new(Duration::from_millis(10));
        cache.add("k", "v");

        drop(cache);
        tokio::time::sleep(Duration::from_millis(25)).await;

        assert!(reaper.is_finished());
    }

    #[test]
    fn test_new_in_outside_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        // Plain test thread, no runtime entered
        let (cache, reaper) = TtlCache::new_in(Duration::from_millis(5), runtime.handle());
        cache.add("x", "hello");
        assert_eq!(cache.get("x"), Some(Bytes::from_static(b"hello")));

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(cache.get("x"), None);

        runtime.block_on(reaper.shutdown()).unwrap();
    }

    #[tokio::test]
    async fn test_ttl_accessor() {
        let (cache, reaper) = TtlCache::new(Duration::from_millis(250));
        assert_eq!(cache.ttl(), Duration::from_millis(250));
        reaper.shutdown().await.unwrap();
    }
}
