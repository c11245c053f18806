//! Message composer: text input plus attachment button.
//!
//! DESIGN
//! ======
//! Text and media both go through `POST /api/messages/send` and only the
//! server echo is appended to the list. A failed text send restores the
//! draft. Media is validated locally first; the input stays disabled while
//! an upload is in flight and is re-enabled however it ends.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::Message;
use crate::net::types::SendMessageRequest;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::rooms::RoomsState;

/// MIME filter offered by the file picker.
const ACCEPTED_TYPES: &str = "image/*,video/*,application/pdf";

#[cfg(feature = "hydrate")]
/// Apply a stored message to both the list and the sidebar preview.
fn deliver_echo(rooms: RwSignal<RoomsState>, chat: RwSignal<ChatState>, room_id: i64, message: Message) {
    rooms.update(|r| r.record_sent(room_id, &message));
    chat.update(|c| c.push_echo(room_id, message));
}

/// Caller id and selected room, if both are known.
fn target(auth: RwSignal<AuthState>, rooms: RwSignal<RoomsState>) -> Option<(String, i64)> {
    let user_id = auth.with_untracked(|a| a.user_id().map(str::to_owned))?;
    let room_id = rooms.with_untracked(|r| r.selected)?;
    Some((user_id, room_id))
}

#[component]
pub fn Composer() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() || sending.get_untracked() {
            return;
        }
        let Some((user_id, room_id)) = target(auth, rooms) else {
            return;
        };
        let request = SendMessageRequest::text(room_id, &text);
        draft.set(String::new());
        sending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&user_id, &request).await {
                Ok(message) => deliver_echo(rooms, chat, room_id, message),
                Err(e) => {
                    crate::util::alert::show(&format!("Failed to send message: {e}"));
                    draft.set(text);
                }
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, request);
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(msg) = crate::util::upload::validate_upload(&file.type_(), size) {
                crate::util::alert::show(&msg);
                return;
            }
            let Some((user_id, room_id)) = target(auth, rooms) else {
                return;
            };
            chat.update(|c| c.uploading = true);

            leptos::task::spawn_local(async move {
                let result = match crate::net::api::upload_file(&user_id, &file).await {
                    Ok(upload) => {
                        let request = SendMessageRequest::media(room_id, &upload);
                        crate::net::api::send_message(&user_id, &request).await
                    }
                    Err(e) => Err(e),
                };
                match result {
                    Ok(message) => deliver_echo(rooms, chat, room_id, message),
                    Err(e) => crate::util::alert::show(&format!("Failed to upload file: {e}")),
                }
                chat.update(|c| c.uploading = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, chat);
        }
    };

    let uploading = move || chat.with(|c| c.uploading);

    view! {
        <form class="composer" on:submit=on_submit>
            <label class=move || if uploading() { "composer__attach composer__attach--busy" } else { "composer__attach" }>
                <input
                    class="composer__file"
                    type="file"
                    accept=ACCEPTED_TYPES
                    disabled=uploading
                    on:change=on_file
                />
                {move || if uploading() { "Uploading..." } else { "Attach" }}
            </label>
            <input
                class="composer__input"
                type="text"
                placeholder="Type a message"
                disabled=uploading
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button
                class="composer__send"
                type="submit"
                disabled=move || uploading() || sending.get() || draft.with(|d| d.trim().is_empty())
            >
                "Send"
            </button>
        </form>
    }
}
