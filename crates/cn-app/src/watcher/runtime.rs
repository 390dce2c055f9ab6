//! Polling loop driving the [`HistoryWatcher`].
//!
//! Lifecycle management only: start/stop the background task that ticks
//! the watcher at its configured interval. Ticks run to completion before
//! the next one is scheduled; the loop lives until `stop` or process
//! shutdown.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Result;
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::warn;

use super::HistoryWatcher;

pub struct PollingWatcherRuntime {
    watcher: Arc<HistoryWatcher>,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingWatcherRuntime {
    pub fn new(watcher: Arc<HistoryWatcher>) -> Self {
        Self {
            watcher,
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    /// Start the polling task. Idempotent.
    pub async fn start(&self) -> Result<()> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        let watcher = self.watcher.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(watcher.poll_interval());
            // A slow tick delays the next one instead of bunching ticks up.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if let Err(err) = watcher.tick().await {
                    warn!("clipboard tick failed: {err:#}");
                }
            }
        });

        *self.handle.lock().await = Some(handle);

        Ok(())
    }

    /// Stop the polling task. Idempotent.
    pub async fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            // Ticks hold no cross-tick resources, aborting between them is safe.
            handle.abort();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use cn_core::config::WatcherConfig;
    use cn_core::ports::StorePort;
    use cn_infra::{ManualClock, MemoryStore};
    use cn_platform::InMemoryClipboard;

    fn runtime() -> (Arc<InMemoryClipboard>, Arc<MemoryStore>, PollingWatcherRuntime) {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let store = Arc::new(MemoryStore::new());
        let watcher = Arc::new(HistoryWatcher::new(
            clipboard.clone(),
            store.clone(),
            Arc::new(ManualClock::new(1_000_000)),
            WatcherConfig {
                poll_interval: Duration::from_millis(10),
                debounce: Duration::from_millis(0),
            },
        ));
        (clipboard, store, PollingWatcherRuntime::new(watcher))
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let (_clipboard, _store, runtime) = runtime();
        runtime.start().await.unwrap();
        runtime.start().await.unwrap();
        runtime.stop().await.unwrap();
    }

    #[tokio::test]
    async fn stop_without_start_is_a_no_op() {
        let (_clipboard, _store, runtime) = runtime();
        runtime.stop().await.unwrap();
    }

    #[tokio::test]
    async fn polling_picks_up_external_changes() {
        let (clipboard, store, runtime) = runtime();
        runtime.start().await.unwrap();

        clipboard.set_external("polled");
        tokio::time::sleep(Duration::from_millis(100)).await;
        runtime.stop().await.unwrap();

        let history = store.load_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "polled");
    }
}
