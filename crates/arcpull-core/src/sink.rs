//! Entry sinks: where extracted files go.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Result;
use crate::UnpackError;
use crate::extract::ArchiveEntry;
use crate::mime::mime_for;
use crate::record::StoredLocation;
use crate::storage::KeyValueStore;

/// Writes entries below a destination directory.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates the destination root (recursively) before any entry is
    /// processed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Destination root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the entry's bytes to `root/entry.name`, creating parent
    /// directories as needed. Name collisions follow filesystem overwrite
    /// semantics: last write wins.
    fn store(&self, entry: &ArchiveEntry) -> Result<StoredLocation> {
        // Entry names are written as declared. A name reaching outside the
        // root is a known gap inherited from the reference behavior; it is
        // surfaced here instead of silently accepted.
        if entry.name.contains("..") || entry.name.starts_with('/') {
            tracing::warn!(
                name = %entry.name,
                "entry name escapes the destination root; writing as declared"
            );
        }

        let path = self.root.join(&entry.name);
        let store_err = |e: std::io::Error| UnpackError::Store {
            name: entry.name.clone(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(store_err)?;
        }

        let file = File::create(&path).map_err(store_err)?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        writer.write_all(&entry.content).map_err(store_err)?;
        writer.flush().map_err(store_err)?;

        Ok(StoredLocation::Directory {
            stored_path: path.display().to_string(),
        })
    }
}

/// Writes entries to a key/value blob store and resolves public URLs.
pub struct BlobSink {
    store: Arc<dyn KeyValueStore>,
}

impl BlobSink {
    /// Creates a sink backed by the given store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes the entry under a key equal to its declared name, tagged
    /// with the MIME resolver's result, then requests a public URL for
    /// the key.
    async fn store(&self, entry: &ArchiveEntry) -> Result<StoredLocation> {
        let mime_type = mime_for(&entry.name);
        self.store
            .set_value(&entry.name, &entry.content, mime_type)
            .await?;
        let download_url = self.store.public_url(&entry.name).await?;

        Ok(StoredLocation::Blob {
            download_url,
            mime_type: mime_type.to_string(),
        })
    }
}

impl std::fmt::Debug for BlobSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobSink").finish_non_exhaustive()
    }
}

/// The two interchangeable sink implementations.
#[derive(Debug)]
pub enum Sink {
    /// Write entries to a filesystem directory.
    Directory(DirectorySink),
    /// Write entries to a key/value blob store.
    Blob(BlobSink),
}

impl Sink {
    /// Stores one extracted entry and reports where it went.
    ///
    /// # Errors
    ///
    /// Returns [`UnpackError::Store`] on write failure, or
    /// [`UnpackError::UrlIssuance`] when the blob write succeeded but no
    /// public URL could be issued.
    pub async fn store(&self, entry: &ArchiveEntry) -> Result<StoredLocation> {
        match self {
            Self::Directory(sink) => sink.store(entry),
            Self::Blob(sink) => sink.store(entry).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::local::LocalKeyValueStore;
    use tempfile::TempDir;

    fn entry(name: &str, content: &[u8]) -> ArchiveEntry {
        ArchiveEntry {
            name: name.into(),
            size: content.len() as u64,
            content: content.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_directory_sink_writes_nested_entries() {
        let temp = TempDir::new().unwrap();
        let sink = Sink::Directory(DirectorySink::create(temp.path().join("out")).unwrap());

        let location = sink.store(&entry("sub/dir/file.txt", b"payload")).await.unwrap();

        let written = temp.path().join("out/sub/dir/file.txt");
        assert_eq!(std::fs::read(&written).unwrap(), b"payload");
        match location {
            StoredLocation::Directory { stored_path } => {
                assert_eq!(stored_path, written.display().to_string());
            }
            StoredLocation::Blob { .. } => panic!("expected directory location"),
        }
    }

    #[tokio::test]
    async fn test_directory_sink_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let sink = Sink::Directory(DirectorySink::create(temp.path()).unwrap());

        sink.store(&entry("f.txt", b"first")).await.unwrap();
        sink.store(&entry("f.txt", b"second")).await.unwrap();

        assert_eq!(std::fs::read(temp.path().join("f.txt")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_directory_sink_creates_root_up_front() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a/b/c");
        let _sink = DirectorySink::create(&root).unwrap();
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_blob_sink_tags_mime_and_issues_url() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(LocalKeyValueStore::create(temp.path()).unwrap());
        let sink = Sink::Blob(BlobSink::new(Arc::clone(&store) as Arc<dyn KeyValueStore>));

        let location = sink.store(&entry("data.json", b"{}")).await.unwrap();

        match location {
            StoredLocation::Blob {
                download_url,
                mime_type,
            } => {
                assert!(download_url.starts_with("file://"));
                assert_eq!(mime_type, "application/json");
            }
            StoredLocation::Directory { .. } => panic!("expected blob location"),
        }
        assert_eq!(
            store.content_type("data.json").as_deref(),
            Some("application/json")
        );
    }
}
