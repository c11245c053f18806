//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the chat store and upload settings; there is no other shared
//! mutable state in the process.

use std::sync::Arc;

use crate::config::UploadConfig;
use crate::services::store::ChatStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ChatStore>,
    pub upload: UploadConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ChatStore>, upload: UploadConfig) -> Self {
        Self { store, upload }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
