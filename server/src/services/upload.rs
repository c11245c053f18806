//! Media upload passthrough: policy check plus local-disk storage.
//!
//! DESIGN
//! ======
//! The browser validates size and type before uploading; the same policy is
//! re-applied here. Accepted files are written under `UploadConfig::dir`
//! with a random name and served back from `UPLOAD_URL_PREFIX` by the
//! router's static file service.
//!
//! The static file service derives `Content-Type` from the extension, so the
//! extension comes from the validated MIME type, never from the client's file
//! name. Types without a known extension are stored bare and served as
//! `application/octet-stream`.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::UploadConfig;

/// URL prefix uploaded files are served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

const ALLOWED_TYPE_PREFIXES: [&str; 2] = ["image/", "video/"];
const ALLOWED_EXACT_TYPES: [&str; 1] = ["application/pdf"];

/// Extensions for accepted types the browser renders inline as media.
/// SVG is excluded: it can carry script.
const MIME_EXTENSIONS: [(&str, &str); 11] = [
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/avif", "avif"),
    ("image/bmp", "bmp"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("video/ogg", "ogv"),
    ("video/quicktime", "mov"),
    ("application/pdf", "pdf"),
];

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File is too large (at least {size} bytes). Maximum size is {} MB.", .max / (1024 * 1024))]
    TooLarge { size: usize, max: usize },
    #[error("File type {0:?} is not allowed. Only images, videos, and PDF files are accepted.")]
    UnsupportedType(String),
    #[error("No file provided")]
    MissingFile,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload result returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUpload {
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub file_size: i64,
}

/// Whether `mime` is an accepted media type.
#[must_use]
pub fn is_allowed_type(mime: &str) -> bool {
    ALLOWED_TYPE_PREFIXES.iter().any(|prefix| mime.starts_with(prefix)) || ALLOWED_EXACT_TYPES.contains(&mime)
}

/// Check a prospective upload against the size cap and type allowlist.
///
/// # Errors
///
/// Returns `TooLarge` or `UnsupportedType` on violation.
pub fn check_upload(mime: &str, size: usize, max_bytes: usize) -> Result<(), UploadError> {
    if size > max_bytes {
        return Err(UploadError::TooLarge { size, max: max_bytes });
    }
    if !is_allowed_type(mime) {
        return Err(UploadError::UnsupportedType(mime.to_owned()));
    }
    Ok(())
}

/// File extension for an accepted MIME type, ignoring parameters and case.
fn extension_for(mime: &str) -> Option<&'static str> {
    let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    MIME_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == essence)
        .map(|(_, ext)| *ext)
}

/// Random on-disk name with an extension derived from `mime`, if known.
fn stored_name(mime: &str) -> String {
    let id = Uuid::new_v4().simple();
    match extension_for(mime) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Validate and persist one uploaded file.
///
/// # Errors
///
/// Returns a policy error, or `Io` if the file cannot be written.
pub async fn store_upload(
    config: &UploadConfig,
    file_name: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<StoredUpload, UploadError> {
    check_upload(mime, bytes.len(), config.max_bytes)?;

    tokio::fs::create_dir_all(&config.dir).await?;
    let name = stored_name(mime);
    tokio::fs::write(config.dir.join(&name), bytes).await?;

    let file_size = i64::try_from(bytes.len()).unwrap_or(i64::MAX);
    info!(file_name, mime, file_size, stored_as = %name, "upload stored");

    Ok(StoredUpload {
        url: format!("{UPLOAD_URL_PREFIX}/{name}"),
        file_type: mime.to_owned(),
        file_name: file_name.to_owned(),
        file_size,
    })
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
