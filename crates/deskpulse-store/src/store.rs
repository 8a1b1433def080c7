//! Document store over the data root

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use deskpulse_core::{Category, IndexDocument};

use crate::io::atomic_write;
use crate::paths::DataRoot;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o failure at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document JSON error at {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and writes per-period JSON documents below one data root.
///
/// Every write targets a distinct (category, key) path and lands atomically,
/// so the single-writer cron model needs no locking.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: DataRoot,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: DataRoot::new(root),
        }
    }

    pub fn data_root(&self) -> &DataRoot {
        &self.root
    }

    /// Serialize and atomically write one period document.
    pub fn write<T: Serialize>(
        &self,
        category: Category,
        key: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        let path = self.root.document_path(category, key);
        let json = encode(document, &path)?;
        atomic_write(&path, json.as_bytes()).map_err(|source| StoreError::Io { path, source })
    }

    /// Read one period document back.
    pub fn read<T: DeserializeOwned>(
        &self,
        category: Category,
        key: &str,
    ) -> Result<T, StoreError> {
        let path = self.root.document_path(category, key);
        let data =
            std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Decode { path, source })
    }

    pub fn exists(&self, category: Category, key: &str) -> bool {
        self.root.document_path(category, key).is_file()
    }

    /// Serialized size in bytes, or 0 when the document does not exist.
    pub fn size(&self, category: Category, key: &str) -> u64 {
        std::fs::metadata(self.root.document_path(category, key))
            .map(|m| m.len())
            .unwrap_or(0)
    }

    /// All stored keys of one category: `.json` file stems in no particular
    /// order. Pattern filtering is the index builder's concern.
    pub fn list_keys(&self, category: Category) -> Result<Vec<String>, StoreError> {
        let dir = self.root.category_dir(category);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        Ok(keys)
    }

    /// Atomically publish the index document.
    pub fn write_index(&self, index: &IndexDocument) -> Result<(), StoreError> {
        let path = self.root.index_path();
        let json = encode(index, &path)?;
        atomic_write(&path, json.as_bytes()).map_err(|source| StoreError::Io { path, source })
    }

    pub fn read_index(&self) -> Result<IndexDocument, StoreError> {
        let path = self.root.index_path();
        let data =
            std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Decode { path, source })
    }
}

/// Pretty-printed JSON with a trailing newline; the dashboard fetches these
/// files verbatim.
fn encode<T: Serialize>(document: &T, path: &std::path::Path) -> Result<String, StoreError> {
    serde_json::to_string_pretty(document)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })
}
