//! Suffix-based archive format detection.

use crate::Result;
use crate::UnpackError;

/// Supported archive container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// ZIP archive.
    Zip,
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Bzip2-compressed tar archive.
    TarBz2,
    /// 7z archive.
    SevenZ,
}

impl ArchiveFormat {
    /// Returns a human-readable name for this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
            Self::TarBz2 => "tar.bz2",
            Self::SevenZ => "7z",
        }
    }
}

/// Known suffixes, longest first so compound extensions win over their
/// tails (`.tar.gz` must never be read via a bare `.gz` rule).
const SUFFIXES: &[(&str, ArchiveFormat)] = &[
    (".tar.bz2", ArchiveFormat::TarBz2),
    (".tar.gz", ArchiveFormat::TarGz),
    (".tbz2", ArchiveFormat::TarBz2),
    (".tgz", ArchiveFormat::TarGz),
    (".tar", ArchiveFormat::Tar),
    (".zip", ArchiveFormat::Zip),
    (".7z", ArchiveFormat::SevenZ),
];

/// Resolves the archive format from a file name or URL.
///
/// Matching is suffix-based and case-insensitive. Unrecognized suffixes
/// fail with [`UnpackError::UnsupportedFormat`]; no fallback format is
/// guessed.
///
/// # Errors
///
/// Returns an error if the name ends in no known suffix.
///
/// # Examples
///
/// ```
/// use arcpull_core::formats::{ArchiveFormat, resolve_format};
///
/// let format = resolve_format("https://example.com/data.tar.gz")?;
/// assert_eq!(format, ArchiveFormat::TarGz);
/// # Ok::<(), arcpull_core::UnpackError>(())
/// ```
pub fn resolve_format(name: &str) -> Result<ArchiveFormat> {
    let lower = name.to_ascii_lowercase();
    SUFFIXES
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
        .map(|&(_, format)| format)
        .ok_or_else(|| UnpackError::UnsupportedFormat {
            name: name.to_string(),
        })
}
