//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the chat page guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The user record itself is
//! persisted by `util::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State after restoring (or failing to restore) the persisted record.
    pub fn restored(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Id sent as `x-user-id`, if logged in.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Whether `sender` is the logged-in user.
    pub fn is_self(&self, sender: &str) -> bool {
        self.user_id() == Some(sender)
    }
}
