//! Headless ClipNotes runtime.
//!
//! Wires the file store, the OS clipboard, and the watcher together and
//! runs until interrupted. The windowed presentation layer sits on top of
//! the same `App` handle; here recorded entries are only logged.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use cn_app::{AppBuilder, AppEvent};
use cn_infra::{app_dirs, FileStore, SystemClock};
use cn_platform::SystemClipboard;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    registry().with(filter).with(fmt::layer()).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let store_path = app_dirs::store_path()?;
    info!(path = %store_path.display(), "opening store");

    let clipboard = Arc::new(SystemClipboard::new().context("open system clipboard")?);

    let app = AppBuilder::new()
        .with_store(Arc::new(FileStore::new(store_path)))
        .with_clipboard(clipboard)
        .with_clock(Arc::new(SystemClock))
        .build()?;

    let mut events = app.watcher.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            let AppEvent::ClipboardEntryRecorded { entry } = event;
            info!(id = %entry.id, chars = entry.text.chars().count(), "clipboard entry recorded");
        }
    });

    app.runtime.start().await?;
    info!("clipboard watcher running, press Ctrl-C to quit");

    tokio::signal::ctrl_c().await.context("wait for Ctrl-C")?;

    app.runtime.stop().await?;
    info!("shut down");
    Ok(())
}
