//! Clipboard port - abstracts local clipboard access.

use anyhow::Result;

/// Platform-agnostic access to the OS clipboard, text only.
///
/// Reads and writes are synchronous, non-blocking calls. An empty or
/// non-text clipboard reads as an empty string — absence is not an error.
/// Errors are reserved for transient platform failures; the watcher logs
/// them and retries on the next tick.
pub trait ClipboardPort: Send + Sync {
    /// Current plain-text clipboard content.
    fn read_text(&self) -> Result<String>;

    /// Replace the clipboard content.
    fn write_text(&self, text: &str) -> Result<()>;
}
