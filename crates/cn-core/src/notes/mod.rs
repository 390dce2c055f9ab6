//! Notes domain models.
mod note;

pub use note::{upsert, Note, DEFAULT_NOTE_TITLE};
