//! # Slotbook API
//!
//! The upload endpoint server: accepts the booking form's multipart
//! submission on `POST /submit`, stores the photo to disk, and echoes a
//! JSON acknowledgement. No authentication, no size limits beyond axum's
//! defaults.

pub mod error;
pub mod handlers;
pub mod storage;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::storage::FileStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Disk store for uploaded photos
    pub store: Arc<FileStore>,
}

/// Create the HTTP router
pub fn router(store: Arc<FileStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/submit", post(handlers::submit))
        .with_state(AppState { store })
}
