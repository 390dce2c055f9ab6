//! # cn-app
//!
//! Application orchestration layer for ClipNotes: the clipboard history
//! watcher, the boundary use cases the presentation layer calls, and the
//! builder that wires ports together.

pub mod builder;
pub mod event;
pub mod usecases;
pub mod watcher;

pub use builder::{App, AppBuilder, UseCases};
pub use event::AppEvent;
pub use watcher::{HistoryWatcher, PollingWatcherRuntime};
