//! 7z entry decoding.
//!
//! The 7z container requires decoding the whole archive to access any
//! single member, so entries are collected through the decoder's per-entry
//! callback rather than walked lazily. Per-entry sizes are taken from the
//! decoded byte length; the readall-style decode does not expose a
//! separately trustworthy size before decoding.

use std::cell::RefCell;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::UnpackError;

use super::ArchiveEntry;

/// Decodes the full archive, collecting regular files in internal table
/// order. Entries flagged as directories (or whose declared name ends in a
/// path separator) are skipped.
pub(crate) fn entries(data: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut cursor = Cursor::new(data);
    let collected = RefCell::new(Vec::new());

    let extract_fn = |entry: &sevenz_rust2::ArchiveEntry,
                      reader: &mut dyn Read,
                      _dest: &PathBuf|
     -> std::result::Result<bool, sevenz_rust2::Error> {
        if entry.is_directory() || entry.name.ends_with('/') {
            return Ok(true);
        }

        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| sevenz_rust2::Error::Other(e.to_string().into()))?;

        collected.borrow_mut().push(ArchiveEntry {
            name: entry.name.clone(),
            size: content.len() as u64,
            content,
        });
        Ok(true)
    };

    // The destination path is unused: the callback never writes to disk.
    sevenz_rust2::decompress_with_extract_fn(&mut cursor, Path::new("."), extract_fn)
        .map_err(|e| UnpackError::InvalidArchive(format!("failed to decode 7z archive: {e}")))?;

    Ok(collected.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // 7z format magic bytes for signature validation
    const SEVENZ_MAGIC: [u8; 6] = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];

    /// Load pre-generated fixture from tests/fixtures/
    fn load_fixture(name: &str) -> Vec<u8> {
        let fixture_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);

        std::fs::read(&fixture_path).unwrap_or_else(|e| {
            panic!(
                "failed to load fixture {name}. Run tests/fixtures/generate_7z_fixtures.py first. Error: {e}"
            )
        })
    }

    #[test]
    fn test_invalid_magic_rejected() {
        let data = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05];
        let result = entries(&data);
        assert!(matches!(result, Err(UnpackError::InvalidArchive(_))));
    }

    #[test]
    fn test_truncated_header_rejected() {
        let result = entries(&SEVENZ_MAGIC);
        assert!(matches!(result, Err(UnpackError::InvalidArchive(_))));
    }

    #[test]
    fn test_decodes_library_written_archive() {
        // Independent of the checked-in fixtures: round-trips through the
        // library's own writer.
        let mut writer = sevenz_rust2::ArchiveWriter::new(Cursor::new(Vec::new())).unwrap();
        writer.set_content_methods(vec![sevenz_rust2::EncoderConfiguration::new(
            sevenz_rust2::EncoderMethod::COPY,
        )]);
        writer
            .push_archive_entry(
                sevenz_rust2::ArchiveEntry::new_directory("sub"),
                None::<Cursor<&[u8]>>,
            )
            .unwrap();
        writer
            .push_archive_entry(
                sevenz_rust2::ArchiveEntry::new_file("sub/from-writer.txt"),
                Some(Cursor::new(b"written in memory\n".as_slice())),
            )
            .unwrap();
        let data = writer.finish().unwrap().into_inner();

        let entries = entries(&data).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "sub/from-writer.txt");
        assert_eq!(entries[0].content, b"written in memory\n");
        assert_eq!(entries[0].size, 18);
    }

    #[test]
    fn test_extract_simple_fixture() {
        let data = load_fixture("simple.7z");
        let entries = entries(&data).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "file1.txt");
        assert_eq!(entries[0].content, b"hello world\n");
        assert_eq!(entries[0].size, 12);
        assert_eq!(entries[1].name, "file2.txt");
        assert_eq!(entries[1].content, b"second file\n");
    }

    #[test]
    fn test_fixture_directory_skipped() {
        let data = load_fixture("with-dir.7z");
        let entries = entries(&data).unwrap();

        // The directory entry produces no result
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "sub/inner.txt");
        assert_eq!(entries[0].content, b"inner\n");
    }

    #[test]
    fn test_size_computed_from_decoded_length() {
        let data = load_fixture("simple.7z");
        let entries = entries(&data).unwrap();
        for entry in entries {
            assert_eq!(entry.size, entry.content.len() as u64);
        }
    }
}
