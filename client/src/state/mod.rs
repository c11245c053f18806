//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `App` wraps each state struct in an `RwSignal` and provides it as context.
//! The structs themselves are plain data with small transition helpers so the
//! transitions are unit-testable without a reactive runtime.

pub mod auth;
pub mod chat;
pub mod rooms;
