//! HTTP error boundary.
//!
//! Every API handler returns `Result<T, ApiError>`. `ApiError` renders as a
//! `{"error": "..."}` JSON body with the mapped status. Database and internal
//! failures are logged in full and answered with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::services::identity::IdentityError;
use crate::services::messages::MessageError;
use crate::services::upload::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("missing or empty x-user-id header")]
    Unauthorized,
    #[error("caller is not a participant of the room")]
    Forbidden,
    #[error("upload rejected: {0}")]
    UploadRejected(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UploadRejected(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::UserNotFound => "User not found".to_owned(),
            Self::Unauthorized => "Unauthorized".to_owned(),
            Self::Forbidden => "Not a participant".to_owned(),
            Self::UploadRejected(m) | Self::BadRequest(m) => m.clone(),
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => error!(error = %e, "database error"),
            Self::Internal(m) => error!(message = %m, "internal server error"),
            _ => {}
        }
        (self.status(), Json(json!({ "error": self.client_message() }))).into_response()
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound(_) => Self::UserNotFound,
            IdentityError::Database(e) => Self::Database(e),
        }
    }
}

impl From<MessageError> for ApiError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::NotParticipant { .. } => Self::Forbidden,
            MessageError::Database(e) => Self::Database(e),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match &err {
            UploadError::TooLarge { .. } | UploadError::UnsupportedType(_) | UploadError::MissingFile => {
                Self::UploadRejected(err.to_string())
            }
            UploadError::Multipart(m) => Self::BadRequest(m.clone()),
            UploadError::Io(e) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
