use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NoteId;

/// Label substituted for a blank note title on save.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled note";

/// A user note.
///
/// Notes are replaced wholesale on save (upsert by id); there is no partial
/// update. List order is insertion order with new notes prepended — saving
/// an existing note does not move it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Replace a blank (empty or whitespace-only) title with the default label.
    pub fn ensure_title(&mut self) {
        if self.title.trim().is_empty() {
            self.title = DEFAULT_NOTE_TITLE.to_string();
        }
    }
}

/// Upsert `note` into `notes`: replace in place when the id exists,
/// otherwise prepend.
pub fn upsert(notes: &mut Vec<Note>, note: Note) {
    match notes.iter_mut().find(|n| n.id == note.id) {
        Some(existing) => *existing = note,
        None => notes.insert(0, note),
    }
}
