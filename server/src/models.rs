//! Chat records shared by services and routes.
//!
//! DESIGN
//! ======
//! These mirror the `users`, `rooms`, `room_participants`, and `messages`
//! tables. Field names match the JSON the browser client consumes, so route
//! handlers serialize them directly.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Message type stored for plain text messages.
pub const TEXT_MESSAGE_TYPE: &str = "text";

// =============================================================================
// USERS
// =============================================================================

/// A user row. Users are created out of band and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// 0 = Admin, 1 = Agent, 2 = Customer, anything else is a plain user.
    pub role: i32,
}

// =============================================================================
// ROOMS
// =============================================================================

/// A room as listed in a user's directory, with roster and last-message preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub participants: Vec<User>,
    pub last_message: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_message_time: Option<OffsetDateTime>,
}

// =============================================================================
// MESSAGES
// =============================================================================

/// A persisted message. `sender_name` is only populated by joined reads and
/// is omitted from the JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub sender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

/// Insert payload for a new message. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub room_id: i64,
    pub sender_id: String,
    pub kind: String,
    pub message: String,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

impl NewMessage {
    /// Build a plain text message.
    #[must_use]
    pub fn text(room_id: i64, sender_id: &str, message: &str) -> Self {
        Self {
            room_id,
            sender_id: sender_id.to_owned(),
            kind: TEXT_MESSAGE_TYPE.to_owned(),
            message: message.to_owned(),
            media_url: None,
            media_type: None,
            file_name: None,
            file_size: None,
        }
    }
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
