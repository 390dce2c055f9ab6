use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cn_core::ports::StorePort;

/// Empty the entire clipboard history.
pub struct ClearClipboardHistory {
    store: Arc<dyn StorePort>,
}

impl ClearClipboardHistory {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.clear_clipboard_history", skip(self))]
    pub async fn execute(&self) -> Result<()> {
        self.store
            .update_history(Box::new(|history| {
                history.clear();
                true
            }))
            .await?;
        info!("clipboard history cleared");
        Ok(())
    }
}
