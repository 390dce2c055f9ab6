//! In-memory clipboard adapter, for tests and headless runs.

use std::sync::Mutex;

use anyhow::{anyhow, Result};

use cn_core::ports::ClipboardPort;

/// [`ClipboardPort`] backed by a plain string. Doubles as the "external
/// clipboard writer" in tests: `set_external` simulates another program
/// copying text.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    text: Mutex<String>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
        }
    }

    /// Simulate an external program writing to the clipboard.
    pub fn set_external(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.text.lock() {
            *guard = text.into();
        }
    }
}

impl ClipboardPort for InMemoryClipboard {
    fn read_text(&self) -> Result<String> {
        self.text
            .lock()
            .map(|g| g.clone())
            .map_err(|_| anyhow!("clipboard lock poisoned"))
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        *guard = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_what_was_written() {
        let clipboard = InMemoryClipboard::new();
        clipboard.write_text("hello").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "hello");
    }

    #[test]
    fn starts_empty() {
        let clipboard = InMemoryClipboard::new();
        assert_eq!(clipboard.read_text().unwrap(), "");
    }
}
