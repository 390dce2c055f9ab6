//! Application configuration models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Last known window size, persisted for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
        }
    }
}

/// Timing configuration for the clipboard watcher.
#[derive(Debug, Clone, Copy)]
pub struct WatcherConfig {
    /// How often the clipboard is sampled. Shorter intervals increase
    /// responsiveness at the cost of CPU wake-ups.
    pub poll_interval: Duration,
    /// Minimum gap between two accepted entries; changes inside the window
    /// are treated as noise.
    pub debounce: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            debounce: Duration::from_millis(1000),
        }
    }
}
