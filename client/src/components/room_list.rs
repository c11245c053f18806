//! Sidebar list of the caller's rooms.

#[cfg(test)]
#[path = "room_list_test.rs"]
mod room_list_test;

use leptos::prelude::*;

use crate::net::types::Room;
use crate::state::rooms::RoomsState;

const NO_MESSAGES: &str = "No messages";

fn preview(room: &Room) -> String {
    room.last_message
        .as_deref()
        .filter(|m| !m.is_empty())
        .map_or_else(
            || {
                let text = if room.last_message_time.is_some() { "Attachment" } else { NO_MESSAGES };
                text.to_owned()
            },
            str::to_owned,
        )
}

fn participant_label(count: usize) -> String {
    if count == 1 { "1 participant".to_owned() } else { format!("{count} participants") }
}

#[component]
pub fn RoomList() -> impl IntoView {
    let rooms = expect_context::<RwSignal<RoomsState>>();

    view! {
        <ul class="room-list">
            <For
                each=move || rooms.get().items
                key=|room| (room.id, room.last_message_time.clone())
                children=move |room: Room| {
                    let id = room.id;
                    let class = move || {
                        if rooms.with(|r| r.selected == Some(id)) { "room-item room-item--active" } else { "room-item" }
                    };
                    view! {
                        <li class=class on:click=move |_| rooms.update(|r| r.selected = Some(id))>
                            <img class="room-item__image" src=room.image_url.clone() alt=room.name.clone()/>
                            <div class="room-item__body">
                                <div class="room-item__name">{room.name.clone()}</div>
                                <div class="room-item__meta">{participant_label(room.participants.len())}</div>
                                <div class="room-item__preview">{preview(&room)}</div>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
