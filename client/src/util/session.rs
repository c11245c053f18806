//! Persisted login record.
//!
//! The logged-in user is kept in `localStorage` under `currentUser` so a page
//! reload on `/chat` keeps the session. Logout clears it.

use crate::net::types::User;
use crate::util::storage;

/// Storage key for the persisted user record.
pub const CURRENT_USER_KEY: &str = "currentUser";

pub fn load_current_user() -> Option<User> {
    storage::load_json(CURRENT_USER_KEY)
}

pub fn save_current_user(user: &User) {
    storage::save_json(CURRENT_USER_KEY, user);
}

pub fn clear_current_user() {
    storage::remove(CURRENT_USER_KEY);
}
