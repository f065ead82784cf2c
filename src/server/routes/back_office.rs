//! Read-only back-office listings.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};
use tracing::error;

use super::require_admin;
use crate::server::{error::ApiError, state::AppState};

/// Rows returned by each listing.
pub const BACK_OFFICE_LIMIT: usize = 100;

/// Lists recent admin command attempts, newest first.
pub async fn list_command_logs(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    require_admin(&state, &headers)?;
    let entries = state
        .inbound
        .audit()
        .recent(BACK_OFFICE_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to read command log");
            ApiError::internal("Failed to fetch command logs")
        })?;
    Ok(Json(json!({ "data": entries })))
}

/// Lists recent inbound WhatsApp messages, newest first.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    require_admin(&state, &headers)?;
    let messages = state
        .inbound
        .archive()
        .recent(BACK_OFFICE_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to read message archive");
            ApiError::internal("Failed to fetch messages")
        })?;
    Ok(Json(json!({ "data": messages })))
}
