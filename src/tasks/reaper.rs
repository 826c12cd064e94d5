//! Cache Reaper Task
//!
//! Background task that periodically sweeps entries older than the cache TTL.
//!
//! The task alternates between an idle phase (store unlocked, sleeping for
//! one interval) and a sweep phase (store locked, expired entries removed).
//! It starts idle. The sweep interval equals the TTL, so an entry written
//! just after a sweep survives the following one and is removed by the
//! sweep after that.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::{CacheStore, SharedStore};
use crate::error::Result;

/// Lower bound on the sweep interval. A zero TTL still sweeps at this pace.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns a background task that periodically removes entries older than `ttl`.
///
/// The task sleeps for `ttl` (floored at [`MIN_SWEEP_INTERVAL`]) between
/// sweeps and holds the store lock for the full duration of each sweep.
/// It keeps only a weak reference to the store and returns once the store
/// has been dropped or `true` is sent on `shutdown_rx`. Dropping the sender
/// does not stop it.
///
/// # Example
/// ```ignore
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_reaper(store.clone(), Duration::from_secs(5), shutdown_rx);
/// // Later, during shutdown:
/// let _ = shutdown_tx.send(true);
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: SharedStore,
    ttl: Duration,
    shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(reap(Arc::downgrade(&store), ttl, shutdown_rx))
}

async fn reap(
    store: Weak<Mutex<CacheStore>>,
    ttl: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let interval = ttl.max(MIN_SWEEP_INTERVAL);
    let mut signal_open = true;

    info!(?interval, "Starting cache reaper");

    loop {
        tokio::select! {
            changed = shutdown_rx.changed(), if signal_open => {
                match changed {
                    Ok(()) if *shutdown_rx.borrow() => break,
                    Ok(()) => {}
                    // Handle dropped: keep sweeping until the cache goes away
                    Err(_) => signal_open = false,
                }
                continue;
            }
            _ = tokio::time::sleep(interval) => {}
        }

        let Some(shared) = store.upgrade() else {
            debug!("Cache dropped, reaper exiting");
            break;
        };
        let removed = shared.lock().sweep(ttl, Instant::now());
        drop(shared);

        if removed > 0 {
            info!(removed, "Reaper sweep removed expired entries");
        } else {
            debug!("Reaper sweep found no expired entries");
        }
    }

    info!("Cache reaper stopped");
}

// == Reaper Handle ==
/// Owns the reaper task of one cache.
///
/// Dropping the handle detaches the task: it keeps sweeping until every
/// clone of the cache is dropped. Use [`Reaper::shutdown`] to stop it early
/// and join.
#[derive(Debug)]
#[must_use = "dropping the Reaper detaches it; call `shutdown` to stop sweeping"]
pub struct Reaper {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Reaper {
    /// Starts the reaper for `store` on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime; see [`Reaper::spawn_on`].
    pub fn spawn(store: SharedStore, ttl: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store, ttl, shutdown_rx);
        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Starts the reaper for `store` on the runtime behind `runtime`.
    ///
    /// Usable from threads that are not inside a runtime.
    pub fn spawn_on(store: SharedStore, ttl: Duration, runtime: &Handle) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = runtime.spawn(reap(Arc::downgrade(&store), ttl, shutdown_rx));
        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Signals the task to stop and waits for it to finish.
    ///
    /// A sweep already in progress completes first.
    pub async fn shutdown(self) -> Result<()> {
        // Receiver gone means the task already exited
        let _ = self.shutdown_tx.send(true);
        self.handle.await?;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
