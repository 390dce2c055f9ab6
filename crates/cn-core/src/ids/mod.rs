//! ID type wrappers for type safety.

pub mod entry_id;
pub mod note_id;

pub use entry_id::EntryId;
pub use note_id::NoteId;
