//! # cn-platform
//!
//! Platform adapters for ClipNotes. Currently only clipboard access.

pub mod clipboard;

pub use clipboard::{InMemoryClipboard, SystemClipboard};
