//! Error types for the fetch-and-extract pipeline.

use thiserror::Error;

/// Result type alias using [`UnpackError`].
pub type Result<T> = std::result::Result<T, UnpackError>;

/// Errors that can occur during a pipeline run.
///
/// Every variant is fatal to the run: nothing is caught and retried
/// internally. Records pushed to the dataset before the failure stay
/// pushed; no rollback is attempted.
#[derive(Error, Debug)]
pub enum UnpackError {
    /// A required input field was absent.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// The source URL was present but could not be parsed.
    #[error("invalid source url {url}: {source}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The file name suffix did not match any supported archive format.
    #[error("unsupported archive format: {name}")]
    UnsupportedFormat {
        /// The file name that failed to resolve.
        name: String,
    },

    /// Transport-level failure while downloading the archive.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The source URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Archive is corrupted, truncated or otherwise unreadable.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Writing an extracted entry to its sink failed.
    #[error("failed to store entry {name}: {source}")]
    Store {
        /// Name of the entry being stored.
        name: String,
        /// The underlying write failure.
        #[source]
        source: std::io::Error,
    },

    /// A public URL could not be issued for a key that was already written.
    ///
    /// Kept distinct from [`UnpackError::Store`]: the blob write succeeded,
    /// only the retrieval URL failed.
    #[error("no public url for key {key}: {reason}")]
    UrlIssuance {
        /// The blob store key.
        key: String,
        /// Why issuance failed.
        reason: String,
    },

    /// I/O operation failed outside of entry storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UnpackError {
    /// Returns the triggering context (URL, file name or key) if the
    /// variant carries one. Used for boundary logging before propagation.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { url, .. } | Self::Fetch { url, .. } => Some(url),
            Self::UnsupportedFormat { name } | Self::Store { name, .. } => Some(name),
            Self::UrlIssuance { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UnpackError::UnsupportedFormat {
            name: "archive.rar".into(),
        };
        assert_eq!(err.to_string(), "unsupported archive format: archive.rar");
    }

    #[test]
    fn test_missing_input_display() {
        let err = UnpackError::MissingInput("fileUrl");
        assert!(err.to_string().contains("fileUrl"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UnpackError = io_err.into();
        assert!(matches!(err, UnpackError::Io(_)));
    }

    #[test]
    fn test_subject() {
        let err = UnpackError::UnsupportedFormat {
            name: "data.rar".into(),
        };
        assert_eq!(err.subject(), Some("data.rar"));

        let err = UnpackError::UrlIssuance {
            key: "readme.txt".into(),
            reason: "store detached".into(),
        };
        assert_eq!(err.subject(), Some("readme.txt"));

        let err = UnpackError::MissingInput("fileUrl");
        assert_eq!(err.subject(), None);
    }

    #[test]
    fn test_store_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = UnpackError::Store {
            name: "sub/file.bin".into(),
            source: io_err,
        };
        assert!(err.to_string().contains("sub/file.bin"));
        assert!(err.source().is_some());
    }
}
