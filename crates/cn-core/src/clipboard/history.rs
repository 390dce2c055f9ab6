//! Pure list operations on the clipboard history.
//!
//! The history is stored most-recent-first and capped at [`HISTORY_CAP`]
//! entries. These helpers keep that invariant in one place so use cases
//! stay thin.

use crate::ids::EntryId;

use super::{ClipboardEntry, HISTORY_CAP};

/// Prepend `entry` and drop the oldest entries beyond the cap.
pub fn prepend_capped(history: &mut Vec<ClipboardEntry>, entry: ClipboardEntry) {
    history.insert(0, entry);
    history.truncate(HISTORY_CAP);
}

/// Remove the entry with the given id, if present. Idempotent.
pub fn remove_entry(history: &mut Vec<ClipboardEntry>, id: &EntryId) {
    history.retain(|e| &e.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: &str, text: &str) -> ClipboardEntry {
        ClipboardEntry::new(EntryId::from(id), text, Utc::now())
    }

    #[test]
    fn prepend_puts_new_entry_at_head() {
        let mut history = vec![entry("1", "a")];
        prepend_capped(&mut history, entry("2", "b"));
        assert_eq!(history[0].text, "b");
        assert_eq!(history[1].text, "a");
    }

    #[test]
    fn prepend_drops_oldest_beyond_cap() {
        let mut history: Vec<_> = (0..HISTORY_CAP)
            .map(|i| entry(&i.to_string(), &format!("text-{i}")))
            .collect();
        let oldest = history.last().unwrap().id.clone();

        prepend_capped(&mut history, entry("new", "newest"));

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0].text, "newest");
        assert!(history.iter().all(|e| e.id != oldest));
    }

    #[test]
    fn remove_missing_id_leaves_history_unchanged() {
        let mut history = vec![entry("1", "a"), entry("2", "b")];
        remove_entry(&mut history, &EntryId::from("nope"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn remove_existing_id() {
        let mut history = vec![entry("1", "a"), entry("2", "b")];
        remove_entry(&mut history, &EntryId::from("1"));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "b");
    }
}
