//! Media upload route.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use tracing::{debug, warn};

use super::auth::CallerId;
use crate::error::ApiError;
use crate::services::upload::{self, StoredUpload, UploadError};
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";
const DEFAULT_FILE_NAME: &str = "upload";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// `POST /api/upload`: store one file from the `file` multipart field.
///
/// The body limit is disabled on this route; the size cap is enforced while
/// streaming so oversized files are cut off at `max_bytes`.
pub async fn upload_file(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StoredUpload>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let max_bytes = state.upload.max_bytes;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(DEFAULT_FILE_NAME).to_owned();
        let content_type = field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_owned();
        debug!(%user_id, %file_name, %content_type, "receiving upload");

        // Reject disallowed types before reading the body.
        upload::check_upload(&content_type, 0, max_bytes)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| UploadError::Multipart(e.body_text()))?
        {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > max_bytes {
                warn!(%user_id, %file_name, max_bytes, "upload exceeded size limit");
                return Err(UploadError::TooLarge { size: bytes.len(), max: max_bytes }.into());
            }
        }

        let stored = upload::store_upload(&state.upload, &file_name, &content_type, &bytes).await?;
        return Ok(Json(stored));
    }

    Err(UploadError::MissingFile.into())
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
