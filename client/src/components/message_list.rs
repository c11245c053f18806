//! Scrollable message history for the selected room.
//!
//! Own messages are right-aligned; others carry the sender's name. Media
//! messages render inline for images and video, and as a download link with
//! a human-readable size for documents.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::net::types::Message;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::util::upload::{MediaKind, format_file_size, media_kind};

/// `HH:MM` for an RFC 3339 timestamp.
///
/// In the browser this is the viewer's local time via `js_sys::Date`.
/// Elsewhere, or if the browser cannot parse the value, it is the UTC clock
/// time sliced from the string (or the raw string if it is too short).
fn short_time(created_at: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(created_at));
        if !date.get_time().is_nan() {
            return format!("{:02}:{:02}", date.get_hours(), date.get_minutes());
        }
    }
    created_at.get(11..16).unwrap_or(created_at).to_owned()
}

fn document_label(message: &Message) -> String {
    let name = message.file_name.clone().unwrap_or_else(|| "Download".to_owned());
    match message.file_size.and_then(|s| u64::try_from(s).ok()) {
        Some(size) => format!("{name} ({})", format_file_size(size)),
        None => name,
    }
}

fn media_view(message: &Message) -> AnyView {
    let url = message.media_url.clone().unwrap_or_default();
    let alt = message.file_name.clone().unwrap_or_default();
    match media_kind(message.media_type.as_deref()) {
        MediaKind::Image => view! { <img class="message__image" src=url alt=alt/> }.into_any(),
        MediaKind::Video => view! { <video class="message__video" src=url controls=true></video> }.into_any(),
        MediaKind::Document => {
            let label = document_label(message);
            view! {
                <a class="message__file" href=url download=alt target="_blank">
                    {label}
                </a>
            }
            .into_any()
        }
    }
}

#[component]
fn MessageBubble(message: Message, own: bool) -> impl IntoView {
    let class = if own { "message message--own" } else { "message" };
    let sender = (!own).then(|| message.sender_name.clone().unwrap_or_else(|| message.sender.clone()));
    let media = message.is_media().then(|| media_view(&message));
    let text = (!message.message.is_empty()).then(|| message.message.clone());

    view! {
        <li class=class>
            {sender.map(|name| view! { <div class="message__sender">{name}</div> })}
            <div class="message__bubble">
                {media}
                {text.map(|t| view! { <p class="message__text">{t}</p> })}
            </div>
            <div class="message__time">{short_time(&message.created_at)}</div>
        </li>
    }
}

#[component]
pub fn MessageList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="message-list">
            <Show when=move || chat.with(|c| c.loading)>
                <div class="message-list__status">"Loading messages..."</div>
            </Show>
            <Show when=move || chat.with(|c| !c.loading && c.messages.is_empty())>
                <div class="message-list__status">"No messages yet. Say hello!"</div>
            </Show>
            <ul class="message-list__items">
                <For
                    each=move || chat.get().messages
                    key=|message| message.id
                    children=move |message: Message| {
                        let own = auth.with_untracked(|a| a.is_self(&message.sender));
                        view! { <MessageBubble message=message own=own/> }
                    }
                />
            </ul>
        </div>
    }
}
