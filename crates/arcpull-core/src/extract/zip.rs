//! ZIP entry decoding.

use std::io::Cursor;
use std::io::Read;

use crate::Result;
use crate::UnpackError;

use super::ArchiveEntry;

/// Walks the central directory in stored order, reading each file's
/// decompressed bytes individually. Entries flagged as directories are
/// skipped.
pub(crate) fn entries(data: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| UnpackError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| UnpackError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;

        if file.is_dir() {
            continue;
        }

        // Declared uncompressed size from the central directory
        let size = file.size();
        let name = file.name().to_string();

        let mut content = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        file.read_to_end(&mut content).map_err(|e| {
            UnpackError::InvalidArchive(format!("failed to decompress ZIP entry {name}: {e}"))
        })?;

        entries.push(ArchiveEntry {
            name,
            size,
            content,
        });
    }

    Ok(entries)
}
