//! # cn-infra
//!
//! Infrastructure adapters for ClipNotes: the file-backed store, the system
//! clock, and application directory resolution.

pub mod app_dirs;
pub mod store;
pub mod time;

pub use store::{FileStore, MemoryStore};
pub use time::{ManualClock, SystemClock};
