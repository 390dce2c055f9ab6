//! Clipboard history domain models and the watch policy.
mod entry;
mod history;
mod watch;

pub use entry::{ClipboardEntry, HISTORY_CAP};
pub use history::{prepend_capped, remove_entry};
pub use watch::{IgnoreReason, WatchDecision, WatchState};
