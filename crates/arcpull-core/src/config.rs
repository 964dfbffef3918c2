//! Pipeline input and configuration.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::Result;
use crate::UnpackError;

/// Default destination root for the directory sink.
pub const DEFAULT_FOLDER_PATH: &str = "./storage/extracted";

/// Default `maxFileSizeMb` when the input omits it.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 50;

/// Raw key/value input as consumed from the platform input source.
///
/// Field names follow the platform's camelCase convention; `fileUrl` also
/// accepts the `file_url` spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Source archive location. Required.
    #[serde(alias = "file_url")]
    pub file_url: Option<String>,
    /// Destination root for the directory sink.
    pub folder_path: Option<PathBuf>,
    /// Size cap carried through as record metadata; not enforced.
    pub max_file_size_mb: Option<u64>,
    /// Name prefix carried through as record metadata; not enforced.
    pub file_name_prefix: Option<String>,
}

/// Which sink implementation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Write extracted entries below a filesystem directory.
    Directory,
    /// Write extracted entries to the key/value blob store.
    Blob,
}

/// Validated, read-only configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Resolved source archive URL.
    pub file_url: Url,
    /// Chosen sink implementation.
    pub sink: SinkKind,
    /// Destination root (directory-sink mode).
    pub folder_path: PathBuf,
    /// Pass-through metadata.
    pub max_file_size_mb: u64,
    /// Pass-through metadata.
    pub file_name_prefix: Option<String>,
}

impl PipelineConfig {
    /// Validates raw input into a run configuration.
    ///
    /// # Errors
    ///
    /// Fails fast with [`UnpackError::MissingInput`] when `fileUrl` is
    /// absent, or [`UnpackError::InvalidUrl`] when it does not parse.
    pub fn from_input(input: Input, sink: SinkKind) -> Result<Self> {
        let raw_url = input.file_url.ok_or(UnpackError::MissingInput("fileUrl"))?;
        let file_url = Url::parse(&raw_url).map_err(|source| UnpackError::InvalidUrl {
            url: raw_url,
            source,
        })?;

        Ok(Self {
            file_url,
            sink,
            folder_path: input
                .folder_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FOLDER_PATH)),
            max_file_size_mb: input.max_file_size_mb.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB),
            file_name_prefix: input.file_name_prefix,
        })
    }
}
