use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

use cn_core::{
    clipboard::ClipboardEntry,
    config::WindowBounds,
    notes::Note,
    ports::{Mutation, StorePort},
};

/// The single persisted JSON document.
///
/// Every key is optional on read so a store written by an older build (or a
/// missing file) loads as defaults, and all keys are written together.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoreDocument {
    notes: Vec<Note>,
    clipboard_history: Vec<ClipboardEntry>,
    window_bounds: WindowBounds,
}

/// JSON file-backed [`StorePort`].
///
/// One document holds all three collections. A single internal mutex
/// serializes every read-modify-write cycle, so the watcher task and
/// UI-driven mutations never interleave on the document. Writes go through
/// a temp file followed by a rename, so the store on disk is always either
/// the previous or the fully written new document.
pub struct FileStore {
    path: PathBuf,
    /// Serializes document access across tasks.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Read the document, treating a missing file as the default document.
    async fn read_document(&self) -> Result<StoreDocument> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoreDocument::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse store failed: {}", self.path.display()))
    }

    async fn write_document(&self, doc: &StoreDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc).context("serialize store failed")?;
        self.atomic_write(&content).await
    }

    /// Locked read-modify-write of the document. `mutate` returns whether
    /// the document changed; unchanged documents are not rewritten.
    async fn update_doc<F>(&self, mutate: F) -> Result<StoreDocument>
    where
        F: FnOnce(&mut StoreDocument) -> bool + Send,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.read_document().await?;
        if mutate(&mut doc) {
            self.write_document(&doc).await?;
        }
        Ok(doc)
    }
}

#[async_trait]
impl StorePort for FileStore {
    async fn load_notes(&self) -> Result<Vec<Note>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.notes)
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.update_doc(|doc| {
            doc.notes = notes.to_vec();
            true
        })
        .await
        .map(|_| ())
    }

    async fn update_notes(&self, mutate: Mutation<'_, Note>) -> Result<Vec<Note>> {
        let doc = self.update_doc(|doc| mutate(&mut doc.notes)).await?;
        Ok(doc.notes)
    }

    async fn load_history(&self) -> Result<Vec<ClipboardEntry>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.clipboard_history)
    }

    async fn save_history(&self, history: &[ClipboardEntry]) -> Result<()> {
        self.update_doc(|doc| {
            doc.clipboard_history = history.to_vec();
            true
        })
        .await
        .map(|_| ())
    }

    async fn update_history(
        &self,
        mutate: Mutation<'_, ClipboardEntry>,
    ) -> Result<Vec<ClipboardEntry>> {
        let doc = self
            .update_doc(|doc| mutate(&mut doc.clipboard_history))
            .await?;
        Ok(doc.clipboard_history)
    }

    async fn load_window_bounds(&self) -> Result<WindowBounds> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.window_bounds)
    }

    async fn save_window_bounds(&self, bounds: &WindowBounds) -> Result<()> {
        self.update_doc(|doc| {
            doc.window_bounds = *bounds;
            true
        })
        .await
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;
    use cn_core::ids::{EntryId, NoteId};

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    fn entry(text: &str) -> ClipboardEntry {
        ClipboardEntry::new(EntryId::generate(), text, Utc::now())
    }

    #[tokio::test]
    async fn missing_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load_notes().await.unwrap().is_empty());
        assert!(store.load_history().await.unwrap().is_empty());
        assert_eq!(
            store.load_window_bounds().await.unwrap(),
            WindowBounds::default()
        );
    }

    #[tokio::test]
    async fn history_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let history = vec![entry("b"), entry("a")];
        store.save_history(&history).await.unwrap();

        let loaded = store.load_history().await.unwrap();
        assert_eq!(loaded, history);
    }

    #[tokio::test]
    async fn collections_are_independent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let now = Utc::now();
        let note = Note {
            id: NoteId::from("1"),
            title: "t".into(),
            content: "c".into(),
            created_at: now,
            updated_at: now,
        };
        store.save_notes(&[note.clone()]).await.unwrap();
        store.save_history(&[entry("x")]).await.unwrap();
        store
            .save_window_bounds(&WindowBounds {
                width: 640,
                height: 480,
            })
            .await
            .unwrap();

        // Each write preserved the other keys.
        assert_eq!(store.load_notes().await.unwrap(), vec![note]);
        assert_eq!(store.load_history().await.unwrap().len(), 1);
        assert_eq!(
            store.load_window_bounds().await.unwrap(),
            WindowBounds {
                width: 640,
                height: 480
            }
        );
    }

    #[tokio::test]
    async fn persisted_document_uses_contract_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save_history(&[entry("x")]).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("store.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.get("notes").is_some());
        assert!(json.get("clipboardHistory").is_some());
        assert!(json.get("windowBounds").is_some());
    }

    #[tokio::test]
    async fn interleaved_updates_never_lose_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));
        store.save_history(&[entry("seed")]).await.unwrap();

        // Concurrent read-modify-write cycles: one prepends, one removes the
        // seed. Whatever the interleaving, both mutations must survive.
        let seed_id = store.load_history().await.unwrap()[0].id.clone();
        let prepender = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_history(Box::new(|history| {
                        history.insert(0, entry("new"));
                        true
                    }))
                    .await
            })
        };
        let remover = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_history(Box::new(move |history| {
                        history.retain(|e| e.id != seed_id);
                        true
                    }))
                    .await
            })
        };
        prepender.await.unwrap().unwrap();
        remover.await.unwrap().unwrap();

        let texts: Vec<_> = store
            .load_history()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, ["new"]);
    }

    #[tokio::test]
    async fn update_without_changes_skips_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let history = store.update_history(Box::new(|_| false)).await.unwrap();
        assert!(history.is_empty());
        assert!(!dir.path().join("store.json").exists());
    }

    #[tokio::test]
    async fn parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deep").join("store.json"));
        store.save_notes(&[]).await.unwrap();
        assert!(dir.path().join("nested").join("deep").join("store.json").exists());
    }
}
