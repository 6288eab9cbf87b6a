pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;

use crate::chat::handlers as chat;
use crate::documents::handlers as documents;
use crate::errors::{AppError, Operation};
use crate::resources::handlers as resources;
use crate::simplify::handlers as simplify;
use crate::state::AppState;

/// Headroom on top of `max_upload_bytes` for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Decodes a JSON body, reporting any failure as a processing failure of `operation`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8], operation: Operation) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::processing(operation, e))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis and chat
        .route("/api/simplify", post(simplify::handle_simplify))
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/chat/welcome", get(chat::handle_welcome))
        // Document sessions
        .route(
            "/api/documents",
            post(documents::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/documents/:id",
            get(documents::handle_get_document).delete(documents::handle_delete_document),
        )
        .route(
            "/api/documents/:id/simplify",
            post(documents::handle_simplify_document),
        )
        // Resource directory
        .route(
            "/api/resources/organizations",
            get(resources::handle_list_organizations),
        )
        .route("/api/resources/areas", get(resources::handle_list_areas))
        .route(
            "/api/resources/emergency",
            get(resources::handle_list_emergency),
        )
        .route(
            "/api/resources/self-help",
            get(resources::handle_list_self_help),
        )
        .with_state(state)
}
