//! Application directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "clipnotes";
const STORE_FILE_NAME: &str = "store.json";

/// Per-user data directory for ClipNotes.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("platform data directory not available")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Path of the persistent store file.
pub fn store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE_NAME))
}
