use std::sync::Arc;

use anyhow::Result;
use cn_core::{clipboard::ClipboardEntry, ports::StorePort};

/// Query the clipboard history, most recent first.
pub struct ListClipboardHistory {
    store: Arc<dyn StorePort>,
}

impl ListClipboardHistory {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.list_clipboard_history", skip(self))]
    pub async fn execute(&self) -> Result<Vec<ClipboardEntry>> {
        self.store.load_history().await
    }
}
