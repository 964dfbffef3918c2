//! Output records pushed to the dataset.

use serde::Serialize;

/// Where an extracted entry ended up.
///
/// Exactly one of the two shapes per record: a filesystem path for the
/// directory sink, or a public URL plus content type for the blob sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredLocation {
    /// Entry written below the destination directory.
    Directory {
        /// Path of the written file.
        #[serde(rename = "storedPath")]
        stored_path: String,
    },
    /// Entry written to the key/value blob store.
    Blob {
        /// Public retrieval URL for the stored blob.
        #[serde(rename = "downloadUrl")]
        download_url: String,
        /// Content type the blob was tagged with.
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

/// One dataset record per extracted file.
///
/// `max_file_size_mb` and `file_name_prefix` are carried through as
/// passive metadata; they are not enforced as filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Source archive URL.
    pub file_url: String,
    /// Entry name as declared in the archive.
    pub file_name: String,
    /// Entry size in bytes.
    pub size: u64,
    /// Sink-specific location fields, flattened into the record.
    #[serde(flatten)]
    pub stored: StoredLocation,
    /// Configured size cap, pass-through metadata.
    pub max_file_size_mb: u64,
    /// Configured name prefix, pass-through metadata.
    pub file_name_prefix: Option<String>,
}
