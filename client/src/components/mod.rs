//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome and read/write shared state from Leptos
//! context providers installed by `App`.

pub mod composer;
pub mod message_list;
pub mod room_header;
pub mod room_list;
