//! Error conversion utilities for CLI.
//!
//! Converts arcpull-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use arcpull_core::UnpackError;

/// Converts `UnpackError` to a user-friendly anyhow error with context
pub fn convert_unpack_error(err: UnpackError) -> anyhow::Error {
    match err {
        UnpackError::MissingInput(field) => {
            anyhow!(
                "Required input '{field}' was not provided\n\
                 HINT: Pass the archive URL as an argument or set '{field}' in the --input document."
            )
        }
        UnpackError::InvalidUrl { url, source } => {
            anyhow!(
                "Could not parse '{url}' as a URL: {source}\n\
                 HINT: The URL must be absolute, e.g. https://example.com/data.zip"
            )
        }
        UnpackError::UnsupportedFormat { name } => {
            anyhow!(
                "Archive format not supported: {name}\n\
                 HINT: Supported suffixes: .zip, .tar, .tar.gz, .tgz, .tar.bz2, .tbz2, .7z"
            )
        }
        UnpackError::Fetch { url, source } => {
            anyhow!(
                "Failed to download '{url}': {source}\n\
                 HINT: Check the URL and your network connection."
            )
        }
        UnpackError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive: {reason}\n\
                 HINT: The download may be corrupted, or the file name suffix may not match the content."
            )
        }
        UnpackError::Store { name, source } => {
            anyhow!("Failed to store extracted file '{name}': {source}")
        }
        UnpackError::UrlIssuance { key, reason } => {
            anyhow!("Could not produce a public URL for stored key '{key}': {reason}")
        }
        UnpackError::Io(io_err) => anyhow!("I/O error: {io_err}"),
    }
}
