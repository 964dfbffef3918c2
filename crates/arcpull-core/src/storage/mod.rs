//! External persistence collaborators.
//!
//! The pipeline talks to two narrow interfaces: an append-only dataset for
//! output records and a key/value blob store with public retrieval URLs.
//! [`local`] provides filesystem-backed implementations mirroring the
//! platform's local storage layout.

pub mod local;

use async_trait::async_trait;

use crate::Result;
use crate::record::ExtractionRecord;

/// Append-only record sink.
#[async_trait]
pub trait Dataset: Send + Sync {
    /// Persists one record. Records already pushed are never rolled back.
    async fn push(&self, record: &ExtractionRecord) -> Result<()>;
}

/// Key/value blob store with public retrieval URLs.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Writes `content` under `key`, tagged with `content_type`.
    async fn set_value(&self, key: &str, content: &[u8], content_type: &str) -> Result<()>;

    /// Returns a public retrieval URL for a previously written key.
    ///
    /// Failing here after a successful write is a distinct error from a
    /// write failure ([`crate::UnpackError::UrlIssuance`]).
    async fn public_url(&self, key: &str) -> Result<String>;
}
