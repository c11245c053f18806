//! Room directory route.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use super::auth::CallerId;
use crate::error::ApiError;
use crate::models::RoomSummary;
use crate::services::rooms;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    pub rooms: Vec<RoomSummary>,
}

/// `GET /api/rooms`: rooms the caller participates in.
pub async fn list_rooms(State(state): State<AppState>, CallerId(user_id): CallerId) -> Result<Json<RoomsResponse>, ApiError> {
    let rooms = rooms::list_rooms(state.store.as_ref(), &user_id).await?;
    Ok(Json(RoomsResponse { rooms }))
}

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;
