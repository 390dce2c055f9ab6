use std::sync::Mutex;

use anyhow::{anyhow, Result};

use cn_core::ports::ClipboardPort;

/// [`ClipboardPort`] over the OS clipboard via `arboard`.
///
/// `arboard::Clipboard` is not `Sync`, so the handle lives behind a mutex.
/// Contention is negligible: the watcher tick and the occasional UI-driven
/// copy are the only callers.
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().map_err(|e| anyhow!(e))?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, arboard::Clipboard>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard handle poisoned"))
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        let mut clipboard = self.lock()?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard or non-text content reads as empty text,
            // never as a failure.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(anyhow!(e)),
        }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = self.lock()?;
        clipboard.set_text(text.to_string()).map_err(|e| anyhow!(e))
    }
}
