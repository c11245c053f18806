//! Login stub and caller identity extraction.
//!
//! There is no session: the browser stores the user returned by login and
//! echoes its id in the `x-user-id` header on every later call.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::User;
use crate::services::identity;
use crate::state::AppState;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

// =============================================================================
// CALLER EXTRACTOR
// =============================================================================

/// Caller identity taken verbatim from the `x-user-id` header.
/// Use as a handler parameter to require the header; it is never verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_owned()))
            .ok_or(ApiError::Unauthorized)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub identifier: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

/// `POST /api/auth/login`: resolve an identifier to a user.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let user = identity::login(state.store.as_ref(), &body.identifier).await?;
    tracing::info!(user_id = %user.id, role = user.role, "user logged in");
    Ok(Json(LoginResponse { success: true, user }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
