use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cn_core::{ids::NoteId, notes::Note, ports::StorePort};

/// Remove a note by id. Deleting a missing id is a no-op success.
pub struct DeleteNote {
    store: Arc<dyn StorePort>,
}

impl DeleteNote {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.delete_note", skip(self), fields(note_id = %id))]
    pub async fn execute(&self, id: &NoteId) -> Result<Vec<Note>> {
        let mut removed = false;
        let notes = {
            let removed = &mut removed;
            self.store
                .update_notes(Box::new(move |notes| {
                    let before = notes.len();
                    notes.retain(|n| &n.id != id);
                    *removed = notes.len() != before;
                    *removed
                }))
                .await?
        };

        if removed {
            info!("note deleted");
        }
        Ok(notes)
    }
}
