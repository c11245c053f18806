//! Wire types for the room chat JSON API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON exactly. Room and message rows use
//! snake_case column names; request bodies and the upload response use
//! camelCase. Timestamps stay as RFC 3339 strings because the client only
//! displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Message type for plain text messages.
pub const TEXT_MESSAGE: &str = "text";
/// Message type for messages that reference an uploaded file.
pub const MEDIA_MESSAGE: &str = "media";

/// A chat user as returned by login and embedded in room rosters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: i32,
}

/// A room in the caller's directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub participants: Vec<User>,
    pub last_message: Option<String>,
    pub last_message_time: Option<String>,
}

/// A persisted message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "type", default = "default_message_type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    pub sender: String,
    pub sender_name: Option<String>,
    pub created_at: String,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

impl Message {
    /// Whether this message carries an uploaded file.
    pub fn is_media(&self) -> bool {
        self.kind == MEDIA_MESSAGE && self.media_url.is_some()
    }
}

fn default_message_type() -> String {
    TEXT_MESSAGE.to_owned()
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// Body of `POST /api/messages/send`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub room_id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

impl SendMessageRequest {
    /// A plain text message for `room_id`.
    pub fn text(room_id: i64, message: &str) -> Self {
        Self {
            room_id,
            message: message.to_owned(),
            kind: TEXT_MESSAGE.to_owned(),
            ..Self::default()
        }
    }

    /// A media message referencing a completed upload.
    pub fn media(room_id: i64, upload: &UploadResponse) -> Self {
        Self {
            room_id,
            message: String::new(),
            kind: MEDIA_MESSAGE.to_owned(),
            media_url: Some(upload.url.clone()),
            media_type: Some(upload.file_type.clone()),
            file_name: Some(upload.file_name.clone()),
            file_size: Some(upload.file_size),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: Message,
}

/// Result of `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub file_size: i64,
}

/// `{"error": "..."}` body returned by every failing API route.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
