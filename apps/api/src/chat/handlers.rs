//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{debug, info};

use crate::chat::responses::WELCOME_MESSAGE;
use crate::errors::{AppError, Operation};
use crate::models::chat::{ChatRequest, ChatTurn};
use crate::routes::decode_json;
use crate::state::AppState;

/// POST /api/chat
///
/// Replies to the latest user turn with a canned paragraph as `text/plain`.
/// The body is decoded by hand so a malformed transcript surfaces as a
/// processing failure rather than axum's 4xx rejection.
pub async fn handle_chat(State(state): State<AppState>, body: Bytes) -> Result<String, AppError> {
    let request: ChatRequest = decode_json(&body, Operation::Chat)?;
    let message = request.latest_user_message();

    let selection = state.selector.select(message);
    info!(
        turns = request.messages.len(),
        topic = selection.topic.as_str(),
        "chat reply selected"
    );

    debug!("Pacing chat reply by {:?}", state.config.chat_delay);
    tokio::time::sleep(state.config.chat_delay).await;

    Ok(selection.response.to_string())
}

/// GET /api/chat/welcome
///
/// The assistant turn a client seeds a new conversation with.
pub async fn handle_welcome() -> Json<ChatTurn> {
    Json(ChatTurn::assistant(WELCOME_MESSAGE))
}
