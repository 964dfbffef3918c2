//! Fetch-and-extract pipeline for remote archives.
//!
//! `arcpull-core` downloads a single remote archive, resolves its container
//! format from the file name, extracts every regular file fully in memory,
//! hands each one to a configurable sink (filesystem directory or key/value
//! blob store with public URLs), and emits one record per extracted file to
//! an append-only dataset.
//!
//! Supported containers: ZIP, TAR (plain, gzip, bzip2) and 7z. Extraction is
//! all-or-nothing per archive; any decode error fails the whole run.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use arcpull_core::config::{Input, PipelineConfig, SinkKind};
//! use arcpull_core::pipeline::Pipeline;
//! use arcpull_core::sink::{DirectorySink, Sink};
//! use arcpull_core::storage::local::LocalDataset;
//!
//! # async fn run() -> arcpull_core::Result<()> {
//! let input = Input {
//!     file_url: Some("https://example.com/data.tar.gz".into()),
//!     ..Input::default()
//! };
//! let config = PipelineConfig::from_input(input, SinkKind::Directory)?;
//!
//! let sink = Sink::Directory(DirectorySink::create(&config.folder_path)?);
//! let dataset = Arc::new(LocalDataset::create("./storage/datasets/default")?);
//! let records = Pipeline::new(sink, dataset).run(&config).await?;
//! println!("extracted {} files", records.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod mime;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod storage;
pub mod test_utils;

// Re-export main API types
pub use config::PipelineConfig;
pub use error::Result;
pub use error::UnpackError;
pub use extract::ArchiveEntry;
pub use extract::extract_entries;
pub use formats::ArchiveFormat;
pub use formats::resolve_format;
pub use mime::mime_for;
pub use pipeline::Pipeline;
pub use record::ExtractionRecord;
pub use sink::Sink;
