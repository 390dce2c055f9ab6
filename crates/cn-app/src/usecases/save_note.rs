use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cn_core::{
    notes::{self, Note},
    ports::{ClockPort, StorePort},
};

/// Upsert a note: replace in place when the id exists, otherwise prepend.
///
/// A blank title is replaced with the default label, and `updated_at` is
/// refreshed. The note list is persisted before the call returns; on error
/// nothing is committed and the caller may retry.
pub struct SaveNote {
    store: Arc<dyn StorePort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveNote {
    pub fn new(store: Arc<dyn StorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    #[tracing::instrument(name = "usecase.save_note", skip(self, note), fields(note_id = %note.id))]
    pub async fn execute(&self, mut note: Note) -> Result<Vec<Note>> {
        note.ensure_title();
        note.updated_at = self.clock.now_utc();

        let all = self
            .store
            .update_notes(Box::new(move |all| {
                notes::upsert(all, note);
                true
            }))
            .await?;

        info!(count = all.len(), "note saved");
        Ok(all)
    }
}
