//! Axum route handlers for the Simplify API.

use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::{AppError, Operation};
use crate::models::document::{SimplificationResult, SimplifyRequest};
use crate::routes::decode_json;
use crate::state::AppState;

/// POST /api/simplify
///
/// Returns the plain-language explanation and action items for a document
/// identified only by name and MIME type. Parse failures are reported as a
/// generic processing failure.
pub async fn handle_simplify(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SimplificationResult>, AppError> {
    let request: SimplifyRequest = decode_json(&body, Operation::Simplify)?;

    let result = run_simplifier(&state, &request.file_name, &request.file_type).await?;

    Ok(Json(result))
}

/// Runs the configured simplifier and applies the pacing delay.
/// Shared with the document-session endpoint.
pub(crate) async fn run_simplifier(
    state: &AppState,
    file_name: &str,
    file_type: &str,
) -> Result<SimplificationResult, AppError> {
    info!(
        file_name,
        file_type,
        backend = state.simplifier.backend(),
        "simplifying document"
    );

    let result = state.simplifier.simplify(file_name, file_type).await?;

    debug!("Pacing simplification by {:?}", state.config.simplify_delay);
    tokio::time::sleep(state.config.simplify_delay).await;

    Ok(result)
}
