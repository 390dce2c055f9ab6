use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Maximum number of entries the clipboard history may hold.
pub const HISTORY_CAP: usize = 200;

/// A single captured clipboard text.
///
/// Entries are immutable once created; the history only ever prepends,
/// removes, or truncates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub text: String,
    /// Creation instant, used for display and recency only.
    pub timestamp: DateTime<Utc>,
}

impl ClipboardEntry {
    pub fn new(id: EntryId, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            timestamp,
        }
    }
}
