//! Message list state for the selected room.
//!
//! DESIGN
//! ======
//! Messages are only appended from server echoes, never optimistically, so
//! the list always holds stored rows in server order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Message;

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub room_id: Option<i64>,
    pub messages: Vec<Message>,
    pub loading: bool,
    pub uploading: bool,
}

impl ChatState {
    /// Begin loading `room_id`, discarding the previous room's messages.
    pub fn start_loading(&mut self, room_id: i64) {
        self.room_id = Some(room_id);
        self.messages.clear();
        self.loading = true;
    }

    /// Install a fetched history. Ignored if the user switched rooms meanwhile.
    pub fn set_messages(&mut self, room_id: i64, messages: Vec<Message>) {
        if self.room_id != Some(room_id) {
            return;
        }
        self.messages = messages;
        self.loading = false;
    }

    /// Append a server echo. Ignored for another room or an id already shown.
    pub fn push_echo(&mut self, room_id: i64, message: Message) {
        if self.room_id != Some(room_id) || self.messages.iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.push(message);
    }
}
