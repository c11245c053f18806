//! Helpers for driving `api_routes` in tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::UploadConfig;
use crate::services::memory_store::MemoryChatStore;
use crate::state::test_helpers;

/// Router over the shared seeded fixture, plus a handle to inspect the store.
pub fn seeded_router() -> (Router, Arc<MemoryChatStore>) {
    let store = test_helpers::seeded_store();
    let state = test_helpers::test_app_state(store.clone(), UploadConfig::default());
    (super::api_routes(state), store)
}

/// Send one request and decode the JSON response body (`Value::Null` if empty).
pub async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn get(uri: &str, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(super::auth::USER_ID_HEADER, user_id);
    }
    builder.body(Body::empty()).expect("request should build")
}

pub fn post_json(uri: &str, user_id: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(user_id) = user_id {
        builder = builder.header(super::auth::USER_ID_HEADER, user_id);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}
