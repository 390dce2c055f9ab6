use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cn_core::{
    clipboard::{self, ClipboardEntry},
    ids::EntryId,
    ports::StorePort,
};

/// Remove a clipboard entry by id. Deleting a missing id is a no-op success.
pub struct DeleteClipboardEntry {
    store: Arc<dyn StorePort>,
}

impl DeleteClipboardEntry {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.delete_clipboard_entry", skip(self), fields(entry_id = %id))]
    pub async fn execute(&self, id: &EntryId) -> Result<Vec<ClipboardEntry>> {
        let mut removed = false;
        let history = {
            let removed = &mut removed;
            self.store
                .update_history(Box::new(move |history| {
                    let before = history.len();
                    clipboard::remove_entry(history, id);
                    *removed = history.len() != before;
                    *removed
                }))
                .await?
        };

        if removed {
            info!("clipboard entry deleted");
        }
        Ok(history)
    }
}
