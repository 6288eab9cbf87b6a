//! Axum route handlers for the Documents API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::documents::session::DocumentSession;
use crate::documents::upload::capture_document;
use crate::errors::AppError;
use crate::models::document::{PreviewKind, SimplificationResult};
use crate::simplify::handlers::run_simplifier;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// Session summary returned on upload. Leaves out the data URI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub session_id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub preview_kind: PreviewKind,
    pub expires_at: DateTime<Utc>,
}

impl From<&DocumentSession> for UploadResponse {
    fn from(session: &DocumentSession) -> Self {
        UploadResponse {
            session_id: session.id,
            name: session.document.name.clone(),
            mime_type: session.document.mime_type.clone(),
            size_bytes: session.document.size_bytes,
            preview_kind: session.preview_kind,
            expires_at: session.expires_at,
        }
    }
}

/// POST /api/documents
///
/// Accepts a multipart upload with a single `file` field, validates it and
/// opens a document session for it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let limit = state.config.max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;

        let document = capture_document(&name, &mime_type, &bytes, limit)?;
        let session = state.sessions.create(document, Utc::now()).await;
        let active_sessions = state.sessions.len().await;

        info!(
            session_id = %session.id,
            mime_type = %session.document.mime_type,
            size_bytes = session.document.size_bytes,
            active_sessions,
            "document session opened"
        );

        return Ok((StatusCode::CREATED, Json(UploadResponse::from(&session))));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// GET /api/documents/:id
///
/// Full session, including the document's data URI for client-side preview.
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DocumentSession>, AppError> {
    let id = parse_session_id(&raw_id)?;
    let session = state
        .sessions
        .get(id, Utc::now())
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(session))
}

/// DELETE /api/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_session_id(&raw_id)?;
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }

    info!(session_id = %id, "document session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/documents/:id/simplify
///
/// Simplifies the session's document. The first result is stored on the
/// session and returned unchanged by later calls.
pub async fn handle_simplify_document(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<SimplificationResult>, AppError> {
    let id = parse_session_id(&raw_id)?;
    let inputs = state
        .sessions
        .simplify_inputs(id, Utc::now())
        .await
        .ok_or_else(|| session_not_found(id))?;

    if let Some(existing) = inputs.simplification {
        return Ok(Json(existing));
    }

    let result = run_simplifier(&state, &inputs.name, &inputs.mime_type).await?;

    // The session may have been deleted while the simplifier ran.
    let stored = state
        .sessions
        .set_simplification(id, result)
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(stored))
}

fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("'{raw}' is not a valid document session id")))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Document session {id} not found"))
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_session_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_session_id("not-a-uuid"),
            Err(AppError::Validation(msg)) if msg.contains("not-a-uuid")
        ));
    }
}
