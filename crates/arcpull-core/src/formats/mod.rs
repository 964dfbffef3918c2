//! Archive format resolution.

pub mod detect;

// Re-export main types for convenience
pub use detect::ArchiveFormat;
pub use detect::resolve_format;
