//! Room directory state for the chat sidebar.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use crate::net::types::{Message, Room};

/// The caller's rooms and the current selection.
#[derive(Clone, Debug, Default)]
pub struct RoomsState {
    pub items: Vec<Room>,
    pub selected: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RoomsState {
    /// Replace the room list and auto-select the first room when nothing
    /// (or a room no longer listed) is selected.
    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.items = rooms;
        self.loading = false;
        self.error = None;
        let still_listed = self
            .selected
            .is_some_and(|id| self.items.iter().any(|r| r.id == id));
        if !still_listed {
            self.selected = self.items.first().map(|r| r.id);
        }
    }

    pub fn selected_room(&self) -> Option<&Room> {
        let id = self.selected?;
        self.items.iter().find(|r| r.id == id)
    }

    /// Update a room's preview after a send and move it to the top, matching
    /// the server's most-recent-first ordering.
    pub fn record_sent(&mut self, room_id: i64, message: &Message) {
        let Some(pos) = self.items.iter().position(|r| r.id == room_id) else {
            return;
        };
        let mut room = self.items.remove(pos);
        room.last_message = Some(message.message.clone());
        room.last_message_time = Some(message.created_at.clone());
        self.items.insert(0, room);
    }
}
