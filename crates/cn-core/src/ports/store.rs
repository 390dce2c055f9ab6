//! Store port - abstracts the durable key-value store.

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardEntry;
use crate::config::WindowBounds;
use crate::notes::Note;

/// Mutation applied to a collection while the store holds its internal
/// lock. Returns whether the collection changed and must be persisted.
pub type Mutation<'a, T> = Box<dyn FnOnce(&mut Vec<T>) -> bool + Send + 'a>;

/// Durable store for the three persisted collections.
///
/// The store owns the data exclusively; callers hold no copies beyond a
/// transient working set. The watcher task and UI-driven mutations may run
/// on different tasks, and a load→mutate→save cycle split across separate
/// calls is not atomic — every read-modify-write therefore goes through
/// `update_notes`/`update_history`, which implementations must run as one
/// critical section under a single internal lock. The wholesale `save_*`
/// setters remain for writes that replace a collection without reading it.
///
/// Loads on a missing or empty store return the defaults (empty lists,
/// default window bounds), never an error.
#[async_trait]
pub trait StorePort: Send + Sync {
    async fn load_notes(&self) -> Result<Vec<Note>>;

    async fn save_notes(&self, notes: &[Note]) -> Result<()>;

    /// Atomically load, mutate, and persist the notes list; returns the
    /// updated list.
    async fn update_notes(&self, mutate: Mutation<'_, Note>) -> Result<Vec<Note>>;

    /// Clipboard history, most recent first, capped at
    /// [`HISTORY_CAP`](crate::clipboard::HISTORY_CAP).
    async fn load_history(&self) -> Result<Vec<ClipboardEntry>>;

    async fn save_history(&self, history: &[ClipboardEntry]) -> Result<()>;

    /// Atomically load, mutate, and persist the clipboard history; returns
    /// the updated list.
    async fn update_history(
        &self,
        mutate: Mutation<'_, ClipboardEntry>,
    ) -> Result<Vec<ClipboardEntry>>;

    async fn load_window_bounds(&self) -> Result<WindowBounds>;

    async fn save_window_bounds(&self, bounds: &WindowBounds) -> Result<()>;
}
