//! Identity check for the login stub.
//!
//! There is no credential verification: an identifier that matches a user id
//! or display name is enough to act as that user.

use tracing::debug;

use crate::models::User;
use crate::services::store::ChatStore;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("no user matches identifier {0:?}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Resolve `identifier` (email-style id or display name) to a user.
///
/// Matching is exact; no trimming or case folding.
///
/// # Errors
///
/// Returns `NotFound` when nothing matches, or a database error.
pub async fn login(store: &dyn ChatStore, identifier: &str) -> Result<User, IdentityError> {
    let user = store
        .find_user(identifier)
        .await?
        .ok_or_else(|| IdentityError::NotFound(identifier.to_owned()))?;

    debug!(user_id = %user.id, "identifier resolved");
    Ok(user)
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
