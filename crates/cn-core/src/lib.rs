//! # cn-core
//!
//! Core domain models and business logic for ClipNotes.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod notes;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, IgnoreReason, WatchDecision, WatchState, HISTORY_CAP};
pub use config::{WatcherConfig, WindowBounds};
pub use ids::{EntryId, NoteId};
pub use notes::{Note, DEFAULT_NOTE_TITLE};
