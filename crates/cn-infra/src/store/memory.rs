//! In-memory store adapter, for tests and headless runs.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use cn_core::{
    clipboard::ClipboardEntry,
    config::WindowBounds,
    notes::Note,
    ports::{Mutation, StorePort},
};

#[derive(Debug, Default)]
struct State {
    notes: Vec<Note>,
    history: Vec<ClipboardEntry>,
    window_bounds: WindowBounds,
}

/// [`StorePort`] backed by process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorePort for MemoryStore {
    async fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.state.lock().await.notes.clone())
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.state.lock().await.notes = notes.to_vec();
        Ok(())
    }

    async fn update_notes(&self, mutate: Mutation<'_, Note>) -> Result<Vec<Note>> {
        let mut state = self.state.lock().await;
        let _changed = mutate(&mut state.notes);
        Ok(state.notes.clone())
    }

    async fn load_history(&self) -> Result<Vec<ClipboardEntry>> {
        Ok(self.state.lock().await.history.clone())
    }

    async fn save_history(&self, history: &[ClipboardEntry]) -> Result<()> {
        self.state.lock().await.history = history.to_vec();
        Ok(())
    }

    async fn update_history(
        &self,
        mutate: Mutation<'_, ClipboardEntry>,
    ) -> Result<Vec<ClipboardEntry>> {
        let mut state = self.state.lock().await;
        let _changed = mutate(&mut state.history);
        Ok(state.history.clone())
    }

    async fn load_window_bounds(&self) -> Result<WindowBounds> {
        Ok(self.state.lock().await.window_bounds)
    }

    async fn save_window_bounds(&self, bounds: &WindowBounds) -> Result<()> {
        self.state.lock().await.window_bounds = *bounds;
        Ok(())
    }
}
