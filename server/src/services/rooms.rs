//! Room directory service.

#[cfg(test)]
use std::cmp::Ordering;

use tracing::debug;

use crate::models::RoomSummary;
use crate::services::store::ChatStore;

/// List the rooms `user_id` participates in, most recently active first.
///
/// # Errors
///
/// Returns a database error if the store query fails.
pub async fn list_rooms(store: &dyn ChatStore, user_id: &str) -> Result<Vec<RoomSummary>, sqlx::Error> {
    let rooms = store.rooms_for_user(user_id).await?;
    debug!(%user_id, count = rooms.len(), "rooms listed");
    Ok(rooms)
}

/// Directory order: rooms with messages by last message time descending,
/// then rooms without messages. Ties fall back to ascending room id.
/// `PgChatStore` expresses the same order in SQL; the in-memory store sorts
/// with this.
#[cfg(test)]
#[must_use]
pub fn recency_order(a: &RoomSummary, b: &RoomSummary) -> Ordering {
    match (a.last_message_time, b.last_message_time) {
        (Some(ta), Some(tb)) => tb.cmp(&ta).then(a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;
