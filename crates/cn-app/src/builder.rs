//! Application assembly.

use std::sync::Arc;

use cn_core::{
    config::WatcherConfig,
    ports::{ClipboardPort, ClockPort, StorePort},
};

use crate::usecases::{
    ClearClipboardHistory, CopyToClipboard, DeleteClipboardEntry, DeleteNote, GetWindowBounds,
    ListClipboardHistory, ListNotes, SaveNote, SaveWindowBounds,
};
use crate::watcher::{HistoryWatcher, PollingWatcherRuntime};

/// The boundary operations, ready to be called by the presentation layer.
pub struct UseCases {
    pub list_notes: ListNotes,
    pub save_note: SaveNote,
    pub delete_note: DeleteNote,
    pub list_clipboard_history: ListClipboardHistory,
    pub copy_to_clipboard: CopyToClipboard,
    pub delete_clipboard_entry: DeleteClipboardEntry,
    pub clear_clipboard_history: ClearClipboardHistory,
    pub get_window_bounds: GetWindowBounds,
    pub save_window_bounds: SaveWindowBounds,
}

/// The assembled application runtime.
pub struct App {
    pub use_cases: UseCases,
    pub watcher: Arc<HistoryWatcher>,
    pub runtime: PollingWatcherRuntime,
}

/// Builder for assembling the application runtime.
pub struct AppBuilder {
    store: Option<Arc<dyn StorePort>>,
    clipboard: Option<Arc<dyn ClipboardPort>>,
    clock: Option<Arc<dyn ClockPort>>,
    watcher_config: WatcherConfig,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            clipboard: None,
            clock: None,
            watcher_config: WatcherConfig::default(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn StorePort>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPort>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_watcher_config(mut self, config: WatcherConfig) -> Self {
        self.watcher_config = config;
        self
    }

    pub fn build(self) -> anyhow::Result<App> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("StorePort is required"))?;
        let clipboard = self
            .clipboard
            .ok_or_else(|| anyhow::anyhow!("ClipboardPort is required"))?;
        let clock = self
            .clock
            .ok_or_else(|| anyhow::anyhow!("ClockPort is required"))?;

        let watcher = Arc::new(HistoryWatcher::new(
            clipboard.clone(),
            store.clone(),
            clock.clone(),
            self.watcher_config,
        ));

        let use_cases = UseCases {
            list_notes: ListNotes::new(store.clone()),
            save_note: SaveNote::new(store.clone(), clock),
            delete_note: DeleteNote::new(store.clone()),
            list_clipboard_history: ListClipboardHistory::new(store.clone()),
            copy_to_clipboard: CopyToClipboard::new(clipboard, watcher.watch_state()),
            delete_clipboard_entry: DeleteClipboardEntry::new(store.clone()),
            clear_clipboard_history: ClearClipboardHistory::new(store.clone()),
            get_window_bounds: GetWindowBounds::new(store.clone()),
            save_window_bounds: SaveWindowBounds::new(store),
        };

        Ok(App {
            use_cases,
            runtime: PollingWatcherRuntime::new(watcher.clone()),
            watcher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_infra::{ManualClock, MemoryStore};
    use cn_platform::InMemoryClipboard;

    #[test]
    fn build_fails_without_a_store() {
        let result = AppBuilder::new()
            .with_clipboard(Arc::new(InMemoryClipboard::new()))
            .with_clock(Arc::new(ManualClock::new(0)))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_succeeds_with_all_ports() {
        let result = AppBuilder::new()
            .with_store(Arc::new(MemoryStore::new()))
            .with_clipboard(Arc::new(InMemoryClipboard::new()))
            .with_clock(Arc::new(ManualClock::new(0)))
            .build();
        assert!(result.is_ok());
    }
}
