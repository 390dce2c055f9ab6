//! Clipboard history watcher.
//!
//! [`HistoryWatcher`] samples the clipboard once per tick and turns
//! qualifying changes into history entries; [`PollingWatcherRuntime`]
//! drives it on a tokio interval for the lifetime of the process.
//!
//! The watcher is an event source: it owns the change-detection state and
//! emits [`AppEvent::ClipboardEntryRecorded`] after an entry is durably
//! stored. It never surfaces errors to the user — failed ticks are logged
//! and the next tick re-reads all state.

mod runtime;

pub use runtime::PollingWatcherRuntime;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use cn_core::{
    clipboard::{self, ClipboardEntry, WatchDecision, WatchState},
    config::WatcherConfig,
    ids::EntryId,
    ports::{ClipboardPort, ClockPort, StorePort},
};

use crate::event::AppEvent;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct HistoryWatcher {
    clipboard: Arc<dyn ClipboardPort>,
    store: Arc<dyn StorePort>,
    clock: Arc<dyn ClockPort>,
    /// Shared with `CopyToClipboard`, which marks programmatic writes.
    state: Arc<Mutex<WatchState>>,
    events: broadcast::Sender<AppEvent>,
    config: WatcherConfig,
}

impl HistoryWatcher {
    /// Create the watcher, seeding the change-detection state with the
    /// clipboard's current content so it is never recorded as an entry.
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        store: Arc<dyn StorePort>,
        clock: Arc<dyn ClockPort>,
        config: WatcherConfig,
    ) -> Self {
        let initial = match clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("initial clipboard read failed: {e:#}");
                String::new()
            }
        };

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            clipboard,
            store,
            clock,
            state: Arc::new(Mutex::new(WatchState::new(initial, config.debounce))),
            events,
            config,
        }
    }

    /// Subscribe to push notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.events.subscribe()
    }

    /// Change-detection state, shared with the copy-out use case.
    pub fn watch_state(&self) -> Arc<Mutex<WatchState>> {
        self.state.clone()
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        self.config.poll_interval
    }

    /// Sample the clipboard once.
    ///
    /// Returns the newly recorded entry, if any. Errors cover transient
    /// clipboard and store failures; the runtime logs them and the loop
    /// carries on.
    pub async fn tick(&self) -> Result<Option<ClipboardEntry>> {
        let sampled = self.clipboard.read_text()?;

        let mut state = self.state.lock().await;

        // Skip the store round-trip when nothing changed, which is the
        // overwhelmingly common tick.
        if !state.sample_differs(&sampled) {
            return Ok(None);
        }

        let now_ms = self.clock.now_ms();
        let candidate = ClipboardEntry::new(EntryId::generate(), sampled, self.clock.now_utc());

        // Evaluate and prepend inside the store's critical section, so the
        // head this decision dedups against is the head the write lands on
        // and a concurrent delete or clear can never be undone.
        let mut recorded = None;
        {
            let state = &mut *state;
            let recorded = &mut recorded;
            self.store
                .update_history(Box::new(move |history| {
                    let head_text = history.first().map(|e| e.text.as_str());
                    match state.evaluate(&candidate.text, now_ms, head_text) {
                        WatchDecision::Ignore(reason) => {
                            debug!(?reason, "clipboard change discarded");
                            false
                        }
                        WatchDecision::Record => {
                            clipboard::prepend_capped(history, candidate.clone());
                            *recorded = Some(candidate);
                            true
                        }
                    }
                }))
                .await?;
        }

        match recorded {
            None => Ok(None),
            Some(entry) => {
                // Only after the durable write: the acceptance instant and
                // the notification both refer to committed state.
                state.mark_accepted(now_ms);
                drop(state);

                debug!(id = %entry.id, "clipboard entry recorded");
                let _ = self
                    .events
                    .send(AppEvent::ClipboardEntryRecorded {
                        entry: entry.clone(),
                    });

                Ok(Some(entry))
            }
        }
    }
}
