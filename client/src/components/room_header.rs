//! Header for the selected room with participant avatars colored by role.

use leptos::prelude::*;

use crate::state::rooms::RoomsState;
use crate::util::role::{initial, role_class, role_name};

#[component]
pub fn RoomHeader() -> impl IntoView {
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let room = move || rooms.with(|r| r.selected_room().cloned());

    view! {
        <header class="room-header">
            {move || {
                room()
                    .map(|room| {
                        view! {
                            <img class="room-header__image" src=room.image_url.clone() alt=room.name.clone()/>
                            <h2 class="room-header__name">{room.name.clone()}</h2>
                            <div class="room-header__participants">
                                {room
                                    .participants
                                    .iter()
                                    .map(|p| {
                                        let title = format!("{} ({})", p.name, role_name(p.role));
                                        view! {
                                            <span class=format!("avatar {}", role_class(p.role)) title=title>
                                                {initial(&p.name)}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </header>
    }
}
