//! Client-side upload policy and media display helpers.
//!
//! DESIGN
//! ======
//! Files are checked here before any network call: at most 10 MB and one of
//! image/*, video/*, or application/pdf. The server applies the same policy
//! again on receipt.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Largest file the composer will upload.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// How a media message should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

/// Whether `mime` is an accepted upload type.
pub fn is_allowed_type(mime: &str) -> bool {
    mime.starts_with("image/") || mime.starts_with("video/") || mime == "application/pdf"
}

/// Validate a picked file before uploading it.
///
/// # Errors
///
/// Returns the message to show the user when the file is too large or of a
/// disallowed type. Size is checked first.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), String> {
    if size > MAX_UPLOAD_BYTES {
        return Err(format!(
            "File is too large ({}). Maximum size is {} MB.",
            format_file_size(size),
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }
    if !is_allowed_type(mime) {
        return Err("Only images, videos, and PDF files are allowed.".to_owned());
    }
    Ok(())
}

/// Classify a stored MIME type for rendering.
pub fn media_kind(mime: Option<&str>) -> MediaKind {
    match mime {
        Some(m) if m.starts_with("image/") => MediaKind::Image,
        Some(m) if m.starts_with("video/") => MediaKind::Video,
        _ => MediaKind::Document,
    }
}

/// Human-readable size, e.g. `512 B`, `1.5 KB`, `12.0 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
