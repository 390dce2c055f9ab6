use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::debug;

use cn_core::{clipboard::WatchState, ports::ClipboardPort};

/// Copy a history entry or note text back onto the OS clipboard.
///
/// The watcher's state is marked *before* the write: once the text hits the
/// clipboard a tick may fire at any moment, and it must already see the
/// text as observed or the program's own write would be recorded as a new
/// user entry.
pub struct CopyToClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    watch_state: Arc<Mutex<WatchState>>,
}

impl CopyToClipboard {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, watch_state: Arc<Mutex<WatchState>>) -> Self {
        Self {
            clipboard,
            watch_state,
        }
    }

    #[tracing::instrument(name = "usecase.copy_to_clipboard", skip_all)]
    pub async fn execute(&self, text: &str) -> Result<()> {
        self.watch_state.lock().await.note_programmatic_write(text);
        self.clipboard.write_text(text)?;
        debug!(len = text.len(), "text copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use cn_platform::InMemoryClipboard;

    #[tokio::test]
    async fn writes_text_and_marks_it_observed() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let state = Arc::new(Mutex::new(WatchState::new("", Duration::from_secs(1))));
        let uc = CopyToClipboard::new(clipboard.clone(), state.clone());

        uc.execute("from history").await.unwrap();

        assert_eq!(clipboard.read_text().unwrap(), "from history");
        // The next sample of the same text must not count as a change.
        assert!(!state.lock().await.sample_differs("from history"));
    }
}
