//! Events pushed from the core to the presentation layer.
mod app_event;

pub use app_event::AppEvent;
