//! Boundary operations exposed to the presentation layer.
//!
//! One use case per operation, each owning the ports it needs behind
//! `Arc<dyn Port>`. User-initiated mutations return errors to the caller
//! (the presentation surfaces a non-blocking notification and may retry);
//! deletes of missing ids succeed as no-ops.

mod clear_clipboard_history;
mod copy_to_clipboard;
mod delete_clipboard_entry;
mod delete_note;
mod list_clipboard_history;
mod list_notes;
mod save_note;
mod window_bounds;

pub use clear_clipboard_history::ClearClipboardHistory;
pub use copy_to_clipboard::CopyToClipboard;
pub use delete_clipboard_entry::DeleteClipboardEntry;
pub use delete_note::DeleteNote;
pub use list_clipboard_history::ListClipboardHistory;
pub use list_notes::ListNotes;
pub use save_note::SaveNote;
pub use window_bounds::{GetWindowBounds, SaveWindowBounds};
