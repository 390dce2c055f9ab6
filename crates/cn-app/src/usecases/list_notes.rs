use std::sync::Arc;

use anyhow::Result;
use cn_core::{notes::Note, ports::StorePort};

/// Query the notes collection, stored order (newest prepended).
pub struct ListNotes {
    store: Arc<dyn StorePort>,
}

impl ListNotes {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.list_notes", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Note>> {
        self.store.load_notes().await
    }
}
