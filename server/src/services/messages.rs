//! Message service: membership-gated listing and sending.
//!
//! DESIGN
//! ======
//! Room membership is the only authorization rule: a caller must have a
//! `room_participants` row for the room to read or write its messages. The
//! caller's identity is whatever the `x-user-id` header says.

use tracing::{info, warn};

use crate::models::{Message, NewMessage, TEXT_MESSAGE_TYPE};
use crate::services::store::ChatStore;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("user {user_id} is not a participant of room {room_id}")]
    NotParticipant { room_id: i64, user_id: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A message as submitted by a client, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub room_id: i64,
    pub message: Option<String>,
    pub kind: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl OutgoingMessage {
    /// Apply defaults: missing text becomes `""`, missing type becomes
    /// `"text"`, blank media strings become null.
    #[must_use]
    pub fn into_new_message(self, sender_id: &str) -> NewMessage {
        NewMessage {
            room_id: self.room_id,
            sender_id: sender_id.to_owned(),
            kind: self.kind.unwrap_or_else(|| TEXT_MESSAGE_TYPE.to_owned()),
            message: self.message.unwrap_or_default(),
            media_url: non_blank(self.media_url),
            media_type: non_blank(self.media_type),
            file_name: non_blank(self.file_name),
            file_size: self.file_size,
        }
    }
}

async fn ensure_participant(store: &dyn ChatStore, room_id: i64, user_id: &str) -> Result<(), MessageError> {
    if store.is_participant(room_id, user_id).await? {
        return Ok(());
    }
    warn!(room_id, %user_id, "room access denied");
    Err(MessageError::NotParticipant { room_id, user_id: user_id.to_owned() })
}

/// List every message in `room_id`, oldest first.
///
/// # Errors
///
/// Returns `NotParticipant` if `user_id` has no membership row, or a database error.
pub async fn list_messages(store: &dyn ChatStore, room_id: i64, user_id: &str) -> Result<Vec<Message>, MessageError> {
    ensure_participant(store, room_id, user_id).await?;
    Ok(store.room_messages(room_id).await?)
}

/// Append a message to a room on behalf of `user_id`.
///
/// Every call inserts a new row; there is no deduplication.
///
/// # Errors
///
/// Returns `NotParticipant` if `user_id` has no membership row, or a database error.
pub async fn send_message(
    store: &dyn ChatStore,
    user_id: &str,
    outgoing: OutgoingMessage,
) -> Result<Message, MessageError> {
    ensure_participant(store, outgoing.room_id, user_id).await?;

    let new_message = outgoing.into_new_message(user_id);
    let saved = store.insert_message(&new_message).await?;

    info!(
        message_id = saved.id,
        room_id = new_message.room_id,
        %user_id,
        kind = %saved.kind,
        has_media = saved.media_url.is_some(),
        "message sent"
    );
    Ok(saved)
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
