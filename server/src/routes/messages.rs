//! Message listing and sending routes.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use super::auth::CallerId;
use crate::error::ApiError;
use crate::models::Message;
use crate::services::messages::{self, OutgoingMessage};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: Message,
}

/// Body of `POST /api/messages/send`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    pub room_id: i64,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

impl From<SendMessageBody> for OutgoingMessage {
    fn from(body: SendMessageBody) -> Self {
        Self {
            room_id: body.room_id,
            message: body.message,
            kind: body.kind,
            media_url: body.media_url,
            media_type: body.media_type,
            file_name: body.file_name,
            file_size: body.file_size,
        }
    }
}

/// `GET /api/messages/:room_id`: full history of a room, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    room_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let Path(room_id) = room_id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let messages = messages::list_messages(state.store.as_ref(), room_id, &user_id).await?;
    tracing::debug!(room_id, %user_id, count = messages.len(), "messages listed");
    Ok(Json(MessagesResponse { messages }))
}

/// `POST /api/messages/send`: append a text or media message.
pub async fn send_message(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    body: Result<Json<SendMessageBody>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let message = messages::send_message(state.store.as_ref(), &user_id, body.into()).await?;
    Ok(Json(SendMessageResponse { success: true, message }))
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
