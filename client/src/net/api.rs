//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, identifying the
//! caller with the `x-user-id` header.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. A non-OK response yields the
//! server's `{"error"}` text when present, otherwise a status message, so
//! pages can show it directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Message, Room, SendMessageRequest, User};
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, LoginRequest, LoginResponse, MessagesResponse, RoomsResponse, SendMessageResponse, UploadResponse};

#[cfg(any(test, feature = "hydrate"))]
const USER_ID_HEADER: &str = "x-user-id";

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(room_id: i64) -> String {
    format!("/api/messages/{room_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn error_text(body: Option<String>, action: &str, status: u16) -> String {
    body.filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(action, status))
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, action: &str) -> String {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok().map(|b| b.error);
    error_text(body, action, status)
}

/// Resolve `identifier` to a user via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's error text (e.g. "User not found") or a transport error.
pub async fn login(identifier: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { identifier: identifier.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "login").await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err("login failed".to_owned());
        }
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identifier;
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's rooms from `GET /api/rooms`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_rooms(user_id: &str) -> Result<Vec<Room>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/rooms")
            .header(USER_ID_HEADER, user_id)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "fetch rooms").await);
        }
        let body: RoomsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.rooms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a room's messages, oldest first, from `GET /api/messages/{room_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the caller is not a participant.
pub async fn fetch_messages(user_id: &str, room_id: i64) -> Result<Vec<Message>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(room_id);
        let resp = gloo_net::http::Request::get(&url)
            .header(USER_ID_HEADER, user_id)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "fetch messages").await);
        }
        let body: MessagesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.messages)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, room_id);
        Err("not available on server".to_owned())
    }
}

/// Send a message via `POST /api/messages/send` and return the stored row.
///
/// # Errors
///
/// Returns an error string if the request fails or the caller is not a participant.
pub async fn send_message(user_id: &str, request: &SendMessageRequest) -> Result<Message, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/messages/send")
            .header(USER_ID_HEADER, user_id)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "send message").await);
        }
        let body: SendMessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err("send message failed".to_owned());
        }
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err("not available on server".to_owned())
    }
}

/// Upload one file as the multipart `file` field of `POST /api/upload`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_file(user_id: &str, file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "could not attach file".to_owned())?;
    let resp = gloo_net::http::Request::post("/api/upload")
        .header(USER_ID_HEADER, user_id)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failure(resp, "upload").await);
    }
    resp.json::<UploadResponse>().await.map_err(|e| e.to_string())
}
