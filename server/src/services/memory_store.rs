//! In-memory `ChatStore` for tests.
//!
//! Mirrors the ordering and join semantics of the Postgres queries so route
//! and service tests exercise the same contracts without a live database.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::models::{Message, NewMessage, RoomSummary, User};
use crate::services::rooms::recency_order;
use crate::services::store::ChatStore;

struct RoomRow {
    name: String,
    image_url: String,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    rooms: BTreeMap<i64, RoomRow>,
    participants: BTreeSet<(i64, String)>,
    messages: Vec<(i64, Message)>,
    next_message_id: i64,
}

#[derive(Default)]
pub struct MemoryChatStore {
    inner: Mutex<Inner>,
}

impl MemoryChatStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: &str, name: &str, role: i32) {
        let mut inner = self.inner.lock().expect("store mutex should lock");
        inner.users.push(User { id: id.to_owned(), name: name.to_owned(), role });
    }

    pub fn add_room(&self, id: i64, name: &str, image_url: &str) {
        let mut inner = self.inner.lock().expect("store mutex should lock");
        inner
            .rooms
            .insert(id, RoomRow { name: name.to_owned(), image_url: image_url.to_owned() });
    }

    pub fn add_participant(&self, room_id: i64, user_id: &str) {
        let mut inner = self.inner.lock().expect("store mutex should lock");
        inner.participants.insert((room_id, user_id.to_owned()));
    }

    /// Insert a message with an explicit timestamp.
    pub fn add_message_at(&self, message: &NewMessage, created_at: OffsetDateTime) -> Message {
        let mut inner = self.inner.lock().expect("store mutex should lock");
        inner.next_message_id += 1;
        let saved = Message {
            id: inner.next_message_id,
            kind: message.kind.clone(),
            message: message.message.clone(),
            sender: message.sender_id.clone(),
            sender_name: None,
            created_at,
            media_url: message.media_url.clone(),
            media_type: message.media_type.clone(),
            file_name: message.file_name.clone(),
            file_size: message.file_size,
        };
        inner.messages.push((message.room_id, saved.clone()));
        saved
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.lock().expect("store mutex should lock").messages.len()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn find_user(&self, identifier: &str) -> Result<Option<User>, sqlx::Error> {
        let inner = self.inner.lock().expect("store mutex should lock");
        let by_id = inner.users.iter().find(|u| u.id == identifier);
        let by_name = || inner.users.iter().find(|u| u.name == identifier);
        Ok(by_id.or_else(by_name).cloned())
    }

    async fn rooms_for_user(&self, user_id: &str) -> Result<Vec<RoomSummary>, sqlx::Error> {
        let inner = self.inner.lock().expect("store mutex should lock");
        let mut rooms: Vec<RoomSummary> = inner
            .participants
            .iter()
            .filter(|(_, uid)| uid == user_id)
            .filter_map(|(room_id, _)| {
                let room = inner.rooms.get(room_id)?;
                let mut participants: Vec<User> = inner
                    .participants
                    .iter()
                    .filter(|(rid, _)| rid == room_id)
                    .filter_map(|(_, uid)| inner.users.iter().find(|u| &u.id == uid).cloned())
                    .collect();
                participants.sort_by(|a, b| a.name.cmp(&b.name));
                let last = inner
                    .messages
                    .iter()
                    .filter(|(rid, _)| rid == room_id)
                    .map(|(_, m)| m)
                    .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
                Some(RoomSummary {
                    id: *room_id,
                    name: room.name.clone(),
                    image_url: room.image_url.clone(),
                    participants,
                    last_message: last.map(|m| m.message.clone()),
                    last_message_time: last.map(|m| m.created_at),
                })
            })
            .collect();
        rooms.sort_by(recency_order);
        Ok(rooms)
    }

    async fn is_participant(&self, room_id: i64, user_id: &str) -> Result<bool, sqlx::Error> {
        let inner = self.inner.lock().expect("store mutex should lock");
        Ok(inner.participants.contains(&(room_id, user_id.to_owned())))
    }

    async fn room_messages(&self, room_id: i64) -> Result<Vec<Message>, sqlx::Error> {
        let inner = self.inner.lock().expect("store mutex should lock");
        let mut messages: Vec<Message> = inner
            .messages
            .iter()
            .filter(|(rid, _)| *rid == room_id)
            .filter_map(|(_, m)| {
                // Inner join on users: messages from unknown senders are dropped.
                let sender = inner.users.iter().find(|u| u.id == m.sender)?;
                Some(Message { sender_name: Some(sender.name.clone()), ..m.clone() })
            })
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn insert_message(&self, message: &NewMessage) -> Result<Message, sqlx::Error> {
        Ok(self.add_message_at(message, OffsetDateTime::now_utc()))
    }
}
