//! Window bounds pass-through.
//!
//! The window itself is the presentation layer's concern; its last known
//! size is persisted through the same store as the notes and the history.

use std::sync::Arc;

use anyhow::Result;

use cn_core::{config::WindowBounds, ports::StorePort};

pub struct GetWindowBounds {
    store: Arc<dyn StorePort>,
}

impl GetWindowBounds {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.get_window_bounds", skip(self))]
    pub async fn execute(&self) -> Result<WindowBounds> {
        self.store.load_window_bounds().await
    }
}

pub struct SaveWindowBounds {
    store: Arc<dyn StorePort>,
}

impl SaveWindowBounds {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.save_window_bounds", skip(self))]
    pub async fn execute(&self, bounds: WindowBounds) -> Result<()> {
        self.store.save_window_bounds(&bounds).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_infra::MemoryStore;

    #[tokio::test]
    async fn defaults_until_saved() {
        let store = Arc::new(MemoryStore::new());
        let get = GetWindowBounds::new(store.clone());
        let save = SaveWindowBounds::new(store);

        assert_eq!(get.execute().await.unwrap(), WindowBounds::default());

        save.execute(WindowBounds {
            width: 1280,
            height: 800,
        })
        .await
        .unwrap();

        assert_eq!(
            get.execute().await.unwrap(),
            WindowBounds {
                width: 1280,
                height: 800
            }
        );
    }
}
