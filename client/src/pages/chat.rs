//! Chat page: room sidebar, selected room header, message list, composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. On mount it restores the persisted user
//! (redirecting to `/` when absent), loads the room directory, and the first
//! room is auto-selected. Every change of selection fetches that room's
//! history once.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::room_header::RoomHeader;
use crate::components::room_list::RoomList;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::rooms::RoomsState;
use crate::util::session;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    // Restore the session and load the directory.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let Some(user) = session::load_current_user() else {
            navigate_login("/", NavigateOptions::default());
            return;
        };
        let user_id = user.id.clone();
        auth.set(AuthState::restored(Some(user)));
        rooms.update(|r| r.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_rooms(&user_id).await {
                Ok(list) => rooms.update(|r| r.set_rooms(list)),
                Err(e) => {
                    rooms.update(|r| {
                        r.loading = false;
                        r.error = Some(e.clone());
                    });
                    crate::util::alert::show(&format!("Could not load rooms: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    // Fetch history whenever the selected room changes.
    let selected = Memo::new(move |_| rooms.with(|r| r.selected));
    Effect::new(move || {
        let Some(room_id) = selected.get() else {
            return;
        };
        let Some(user_id) = auth.with_untracked(|a| a.user_id().map(str::to_owned)) else {
            return;
        };
        if chat.with_untracked(|c| c.room_id == Some(room_id)) {
            return;
        }
        chat.update(|c| c.start_loading(room_id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_messages(&user_id, room_id).await {
                Ok(messages) => chat.update(|c| c.set_messages(room_id, messages)),
                Err(e) => {
                    chat.update(|c| c.loading = false);
                    crate::util::alert::show(&format!("Could not load messages: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    let on_logout = move |_| {
        session::clear_current_user();
        auth.set(AuthState::default());
        rooms.set(RoomsState::default());
        chat.set(ChatState::default());
        navigate("/", NavigateOptions::default());
    };

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="chat-page">
            <aside class="chat-sidebar">
                <div class="chat-sidebar__header">
                    <span class="chat-sidebar__user">{user_name}</span>
                    <button class="chat-sidebar__logout" on:click=on_logout>"Log out"</button>
                </div>
                <RoomList/>
            </aside>
            <main class="chat-main">
                <Show
                    when=move || rooms.with(|r| r.selected.is_some())
                    fallback=move || {
                        view! {
                            <div class="chat-empty">
                                {move || if rooms.with(|r| r.loading) { "Loading rooms..." } else { "No rooms yet." }}
                            </div>
                        }
                    }
                >
                    <RoomHeader/>
                    <MessageList/>
                    <Composer/>
                </Show>
            </main>
        </div>
    }
}
