//! Extension-based MIME type lookup for stored blobs.

/// Fallback content type for unknown or missing extensions.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Returns the content type for a file name, keyed by its extension.
///
/// Total function: lookup is case-insensitive on the substring after the
/// last `.`, and any unknown or missing extension yields
/// [`FALLBACK_MIME`]. Repeated calls with the same name always return the
/// same result.
///
/// # Examples
///
/// ```
/// use arcpull_core::mime_for;
///
/// assert_eq!(mime_for("readme.txt"), "text/plain");
/// assert_eq!(mime_for("photo.JPG"), "image/jpeg");
/// assert_eq!(mime_for("mystery.xyz"), "application/octet-stream");
/// ```
#[must_use]
pub fn mime_for(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FALLBACK_MIME;
    };

    match ext.to_ascii_lowercase().as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "md" => "text/markdown",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "7z" => "application/x-7z-compressed",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/vnd.microsoft.icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(mime_for("readme.txt"), "text/plain");
        assert_eq!(mime_for("data.json"), "application/json");
        assert_eq!(mime_for("index.html"), "text/html");
        assert_eq!(mime_for("page.htm"), "text/html");
        assert_eq!(mime_for("report.pdf"), "application/pdf");
        assert_eq!(mime_for("logo.png"), "image/png");
        assert_eq!(mime_for("song.mp3"), "audio/mpeg");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(mime_for("PHOTO.JPG"), "image/jpeg");
        assert_eq!(mime_for("Data.Json"), "application/json");
    }

    #[test]
    fn test_nested_path_uses_last_dot() {
        assert_eq!(mime_for("sub/dir/file.csv"), "text/csv");
        assert_eq!(mime_for("v1.2.3/notes.md"), "text/markdown");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for("mystery.xyz"), FALLBACK_MIME);
        assert_eq!(mime_for("binary.dat"), FALLBACK_MIME);
    }

    #[test]
    fn test_no_extension_falls_back() {
        assert_eq!(mime_for("Makefile"), FALLBACK_MIME);
        assert_eq!(mime_for(""), FALLBACK_MIME);
    }

    #[test]
    fn test_trailing_dot_falls_back() {
        assert_eq!(mime_for("odd."), FALLBACK_MIME);
    }

    #[test]
    fn test_lookup_is_pure() {
        assert_eq!(mime_for("a.txt"), mime_for("a.txt"));
    }
}
