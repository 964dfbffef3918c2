//! Filesystem-backed dataset and key/value store.
//!
//! Mirrors the platform's local storage emulation: dataset records land as
//! sequentially numbered JSON files under the dataset directory, blobs as
//! plain files under the store directory. Public URLs for local blobs are
//! `file://` URLs.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use crate::Result;
use crate::UnpackError;
use crate::record::ExtractionRecord;

use super::Dataset;
use super::KeyValueStore;

/// Append-only dataset writing one numbered JSON file per record.
#[derive(Debug)]
pub struct LocalDataset {
    dir: PathBuf,
    next: AtomicUsize,
}

impl LocalDataset {
    /// Opens (creating if needed) a dataset directory. Numbering continues
    /// after the highest-numbered record already present, so existing
    /// records are never overwritten even when the sequence has gaps.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let next = fs::read_dir(&dir)?
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name();
                name.to_str()?.strip_suffix(".json")?.parse::<usize>().ok()
            })
            .max()
            .map_or(0, |highest| highest + 1);
        Ok(Self {
            dir,
            next: AtomicUsize::new(next),
        })
    }

    /// Directory the records are written into.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl Dataset for LocalDataset {
    async fn push(&self, record: &ExtractionRecord) -> Result<()> {
        let seq = self.next.fetch_add(1, Ordering::SeqCst);
        let path = self.dir.join(format!("{seq:09}.json"));
        let body = serde_json::to_vec_pretty(record)
            .map_err(|e| UnpackError::InvalidArchive(format!("record serialization: {e}")))?;
        fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "pushed dataset record");
        Ok(())
    }
}

/// Blob store writing each key as a file below its root directory.
///
/// Content types are tracked for the lifetime of the store instance so
/// callers (and tests) can inspect what a key was tagged with; the local
/// filesystem itself has nowhere to persist them.
#[derive(Debug)]
pub struct LocalKeyValueStore {
    dir: PathBuf,
    content_types: Mutex<HashMap<String, String>>,
}

impl LocalKeyValueStore {
    /// Opens (creating if needed) a store directory.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            content_types: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the content type a key was written with, if any.
    #[must_use]
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.content_types
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }
}

#[async_trait]
impl KeyValueStore for LocalKeyValueStore {
    async fn set_value(&self, key: &str, content: &[u8], content_type: &str) -> Result<()> {
        let path = self.dir.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| UnpackError::Store {
                name: key.to_string(),
                source: e,
            })?;
        }
        fs::write(&path, content).map_err(|e| UnpackError::Store {
            name: key.to_string(),
            source: e,
        })?;

        if let Ok(mut map) = self.content_types.lock() {
            map.insert(key.to_string(), content_type.to_string());
        }
        tracing::debug!(key, content_type, "stored blob");
        Ok(())
    }

    async fn public_url(&self, key: &str) -> Result<String> {
        let path = self.dir.join(key);
        let absolute = path.canonicalize().map_err(|e| UnpackError::UrlIssuance {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let url = Url::from_file_path(&absolute).map_err(|()| UnpackError::UrlIssuance {
            key: key.to_string(),
            reason: format!("not an absolute path: {}", absolute.display()),
        })?;
        Ok(url.into())
    }
}
