//! TAR entry decoding (plain, gzip, bzip2).

use std::io::Cursor;
use std::io::Read;

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;

use crate::Result;
use crate::UnpackError;
use crate::formats::ArchiveFormat;

use super::ArchiveEntry;

/// Decodes a TAR stream, selecting the decompressor from the resolved
/// format.
pub(crate) fn entries(data: &[u8], format: ArchiveFormat) -> Result<Vec<ArchiveEntry>> {
    let cursor = Cursor::new(data);
    match format {
        ArchiveFormat::Tar => walk(tar::Archive::new(cursor)),
        ArchiveFormat::TarGz => walk(tar::Archive::new(GzDecoder::new(cursor))),
        ArchiveFormat::TarBz2 => walk(tar::Archive::new(BzDecoder::new(cursor))),
        ArchiveFormat::Zip | ArchiveFormat::SevenZ => Err(UnpackError::InvalidArchive(format!(
            "{} is not a TAR variant",
            format.name()
        ))),
    }
}

/// Enumerates header records in stream order, reading each regular file's
/// content. Directories, symlinks and other special entries are skipped.
fn walk<R: Read>(mut archive: tar::Archive<R>) -> Result<Vec<ArchiveEntry>> {
    let iter = archive
        .entries()
        .map_err(|e| UnpackError::InvalidArchive(format!("failed to read TAR entries: {e}")))?;

    let mut entries = Vec::new();
    for entry in iter {
        let mut entry = entry
            .map_err(|e| UnpackError::InvalidArchive(format!("failed to read TAR entry: {e}")))?;

        if !entry.header().entry_type().is_file() {
            continue;
        }

        // Path as declared in the header, without sanitization
        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

        // Declared size from the header record
        let size = entry.header().size().map_err(|e| {
            UnpackError::InvalidArchive(format!("bad size field for TAR entry {name}: {e}"))
        })?;

        let mut content = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        entry.read_to_end(&mut content).map_err(|e| {
            UnpackError::InvalidArchive(format!("failed to read TAR entry {name}: {e}"))
        })?;

        entries.push(ArchiveEntry {
            name,
            size,
            content,
        });
    }

    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarTestBuilder;

    #[test]
    fn test_skips_directories_and_symlinks() {
        let data = TarTestBuilder::new()
            .add_directory("sub/")
            .add_file("sub/kept.txt", b"kept")
            .add_symlink("link", "sub/kept.txt")
            .build();

        let entries = entries(&data, ArchiveFormat::Tar).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "sub/kept.txt");
        assert_eq!(entries[0].content, b"kept");
    }

    #[test]
    fn test_declared_size_from_header() {
        let data = TarTestBuilder::new().add_file("f.bin", &[7u8; 100]).build();
        let entries = entries(&data, ArchiveFormat::Tar).unwrap();
        assert_eq!(entries[0].size, 100);
    }

    #[test]
    fn test_format_mismatch_rejected() {
        let result = entries(b"whatever", ArchiveFormat::Zip);
        assert!(matches!(result, Err(UnpackError::InvalidArchive(_))));
    }
}
