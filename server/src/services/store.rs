//! Chat persistence seam.
//!
//! ARCHITECTURE
//! ============
//! Services talk to storage through the `ChatStore` trait. Production wires
//! `PgChatStore` (plain parameterized queries against Postgres); route and
//! service tests swap in the in-memory store from `memory_store`.
//!
//! Every method is a single round trip. Ordering guarantees (room recency,
//! message chronology) are enforced by the store so callers never re-sort.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::models::{Message, NewMessage, RoomSummary, User};

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Find a user whose id or display name equals `identifier` exactly.
    /// An id match wins over a name match.
    async fn find_user(&self, identifier: &str) -> Result<Option<User>, sqlx::Error>;

    /// Rooms `user_id` participates in, most recently active first, rooms
    /// without messages last.
    async fn rooms_for_user(&self, user_id: &str) -> Result<Vec<RoomSummary>, sqlx::Error>;

    /// Whether a membership row exists for `(room_id, user_id)`.
    async fn is_participant(&self, room_id: i64, user_id: &str) -> Result<bool, sqlx::Error>;

    /// All messages in a room joined with sender names, oldest first.
    async fn room_messages(&self, room_id: i64) -> Result<Vec<Message>, sqlx::Error>;

    /// Insert one message and return the stored row.
    async fn insert_message(&self, message: &NewMessage) -> Result<Message, sqlx::Error>;
}

// =============================================================================
// POSTGRES
// =============================================================================

/// `ChatStore` backed by the shared `PgPool`.
#[derive(Clone)]
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &PgRow, sender_name: Option<String>) -> Message {
    Message {
        id: row.get("id"),
        kind: row.get("type"),
        message: row.get("message"),
        sender: row.get("sender"),
        sender_name,
        created_at: row.get("created_at"),
        media_url: row.get("media_url"),
        media_type: row.get("media_type"),
        file_name: row.get("file_name"),
        file_size: row.get("file_size"),
    }
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn find_user(&self, identifier: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r"SELECT id, name, role
              FROM users
              WHERE id = $1 OR name = $1
              ORDER BY (id = $1) DESC
              LIMIT 1",
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| User { id: r.get("id"), name: r.get("name"), role: r.get("role") }))
    }

    async fn rooms_for_user(&self, user_id: &str) -> Result<Vec<RoomSummary>, sqlx::Error> {
        let rows = sqlx::query(
            r"SELECT
                  r.id,
                  r.name,
                  r.image_url,
                  COALESCE(
                      (SELECT json_agg(
                                  json_build_object('id', u.id, 'name', u.name, 'role', u.role)
                                  ORDER BY u.name
                              )
                       FROM room_participants rp2
                       JOIN users u ON u.id = rp2.user_id
                       WHERE rp2.room_id = r.id),
                      '[]'::json
                  ) AS participants,
                  lm.message AS last_message,
                  lm.created_at AS last_message_time
              FROM rooms r
              JOIN room_participants rp ON rp.room_id = r.id
              LEFT JOIN LATERAL (
                  SELECT message, created_at
                  FROM messages
                  WHERE room_id = r.id
                  ORDER BY created_at DESC, id DESC
                  LIMIT 1
              ) lm ON true
              WHERE rp.user_id = $1
              ORDER BY lm.created_at DESC NULLS LAST, r.id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| {
                let Json(participants): Json<Vec<User>> = r.get("participants");
                RoomSummary {
                    id: r.get("id"),
                    name: r.get("name"),
                    image_url: r.get("image_url"),
                    participants,
                    last_message: r.get("last_message"),
                    last_message_time: r.get("last_message_time"),
                }
            })
            .collect())
    }

    async fn is_participant(&self, room_id: i64, user_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM room_participants WHERE room_id = $1 AND user_id = $2)",
        )
        .bind(room_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn room_messages(&self, room_id: i64) -> Result<Vec<Message>, sqlx::Error> {
        let rows = sqlx::query(
            r"SELECT
                  m.id,
                  m.type,
                  m.message,
                  m.sender_id AS sender,
                  u.name AS sender_name,
                  m.created_at,
                  m.media_url,
                  m.media_type,
                  m.file_name,
                  m.file_size
              FROM messages m
              JOIN users u ON u.id = m.sender_id
              WHERE m.room_id = $1
              ORDER BY m.created_at ASC, m.id ASC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| message_from_row(r, Some(r.get("sender_name"))))
            .collect())
    }

    async fn insert_message(&self, message: &NewMessage) -> Result<Message, sqlx::Error> {
        let row = sqlx::query(
            r"INSERT INTO messages
                  (room_id, sender_id, type, message, media_url, media_type, file_name, file_size)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
              RETURNING
                  id,
                  type,
                  message,
                  sender_id AS sender,
                  created_at,
                  media_url,
                  media_type,
                  file_name,
                  file_size",
        )
        .bind(message.room_id)
        .bind(&message.sender_id)
        .bind(&message.kind)
        .bind(&message.message)
        .bind(&message.media_url)
        .bind(&message.media_type)
        .bind(&message.file_name)
        .bind(message.file_size)
        .fetch_one(&self.pool)
        .await?;

        Ok(message_from_row(&row, None))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
