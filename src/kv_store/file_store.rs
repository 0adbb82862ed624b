//! JSON-file backed key-value store.
//!
//! All entries live in a single JSON object. Every `set` reads the file,
//! updates one entry and replaces the whole file through a temp file in the
//! same directory, so readers never observe a half-written document.

use super::trait_def::{KeyValueStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

type Dump = BTreeMap<String, String>;

pub const DEFAULT_STORE_FILE_NAME: &str = "storefront_store.json";

pub struct FileKeyValueStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Walks up from the current directory looking for an existing store file.
    pub fn infer_path() -> Option<PathBuf> {
        let mut current_dir = std::env::current_dir().ok()?;

        loop {
            let candidate = current_dir.join(DEFAULT_STORE_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }

            if let Some(parent) = current_dir.parent() {
                current_dir = parent.to_path_buf();
            } else {
                break;
            }
        }

        None
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn load_dump(&self) -> Result<Dump, StoreError> {
        let content = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {:?} not found, starting empty", self.file_path);
                return Ok(Dump::new());
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(Dump::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupted {
            path: self.file_path.clone(),
            source,
        })
    }

    async fn save_dump(&self, dump: &Dump) -> Result<(), StoreError> {
        let json_string = serde_json::to_string_pretty(dump)?;

        let parent = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&parent).await?;

        let target = self.file_path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut temp_file = NamedTempFile::new_in(&parent)?;
            temp_file.write_all(json_string.as_bytes())?;
            temp_file.as_file().sync_all()?;
            temp_file.persist(&target).map_err(|err| err.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut dump = self.load_dump().await?;
        Ok(dump.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut dump = self.load_dump().await?;
        dump.insert(key.to_owned(), value);
        self.save_dump(&dump).await?;
        debug!("Wrote key {} to {:?}", key, self.file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("store.json"));

        assert_eq!(store.get("@favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let store = FileKeyValueStore::new(&path);
        store.set("a", "1".to_string()).await.unwrap();
        store.set("b", "2".to_string()).await.unwrap();
        drop(store);

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(reopened.get("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(reopened.get("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_file_layout_is_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = FileKeyValueStore::new(&path);

        store.set("@favorites", "[]".to_string()).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["@favorites"], "[]");
    }

    #[tokio::test]
    async fn test_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");
        let store = FileKeyValueStore::new(&path);

        store.set("k", "v".to_string()).await.unwrap();
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_corrupted_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        let err = store.get("k").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));

        // A write must not clobber the file it could not parse
        assert!(store.set("k", "v".to_string()).await.is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{ this is not json"
        );
    }

    #[tokio::test]
    async fn test_concurrent_sets_on_different_keys_all_land() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileKeyValueStore::new(dir.path().join("store.json")));

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.set(&format!("key-{}", i), i.to_string()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for i in 0..8 {
            assert_eq!(
                store.get(&format!("key-{}", i)).await.unwrap(),
                Some(i.to_string())
            );
        }
    }
}
