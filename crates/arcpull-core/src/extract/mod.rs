//! In-memory archive extraction.
//!
//! All supported containers are decoded from a fully materialized byte
//! buffer: 7z requires whole-archive decoding to access any member, and
//! ZIP/TAR follow the same model for parity. Extraction is all-or-nothing;
//! a decode error anywhere fails the whole call with no partial result.

mod sevenz;
mod tar;
mod zip;

use crate::Result;
use crate::formats::ArchiveFormat;

/// One regular file decoded from a source archive.
///
/// `name` is the relative path exactly as declared inside the archive; it
/// is not sanitized here. Directory entries are skipped during the walk
/// and never constructed. Entries are consumed by the sink within one
/// pipeline pass and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Relative path as declared in the archive.
    pub name: String,
    /// Uncompressed size in bytes. Declared by the container for ZIP/TAR;
    /// computed from the decoded length for 7z.
    pub size: u64,
    /// Decoded file content, fully materialized.
    pub content: Vec<u8>,
}

/// Decodes every regular-file entry of `data` according to `format`.
///
/// Entry order matches the container's declared order (ZIP central
/// directory / TAR stream / 7z internal table); entries are never
/// re-sorted. Directories, symlinks and other non-regular entries are
/// skipped.
///
/// # Errors
///
/// Returns [`crate::UnpackError::InvalidArchive`] if the archive is
/// corrupt, truncated or uses an unsupported internal compression.
pub fn extract_entries(data: &[u8], format: ArchiveFormat) -> Result<Vec<ArchiveEntry>> {
    let entries = match format {
        ArchiveFormat::Zip => zip::entries(data)?,
        ArchiveFormat::Tar | ArchiveFormat::TarGz | ArchiveFormat::TarBz2 => {
            tar::entries(data, format)?
        }
        ArchiveFormat::SevenZ => sevenz::entries(data)?,
    };

    tracing::info!(
        format = format.name(),
        files = entries.len(),
        "extracted archive"
    );
    Ok(entries)
}
