//! WhatsApp webhook: subscription handshake and event delivery.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use crate::server::{error::ApiError, state::AppState};
use crate::whatsapp::domain::{
    VerificationOutcome, VerificationRequest, WebhookEvent, verify_subscription,
};

/// Answers Meta's subscription handshake.
pub async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(request): Query<VerificationRequest>,
) -> Response {
    match verify_subscription(&request, state.verify_token.as_deref()) {
        VerificationOutcome::Verified(challenge) => (StatusCode::OK, challenge).into_response(),
        VerificationOutcome::NotConfigured => {
            error!("WHATSAPP_VERIFY_TOKEN is not set");
            ApiError::internal("Server not configured").into_response()
        }
        VerificationOutcome::Forbidden => {
            warn!(mode = ?request.mode, "webhook verification refused");
            ApiError::Forbidden.into_response()
        }
    }
}

/// Accepts an event delivery.
///
/// Any JSON body is acknowledged with 200 once its messages are handled,
/// whatever happened to them; Meta retries every other status.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "webhook body is not JSON");
        ApiError::bad_request("Bad Request")
    })?;

    let event = WebhookEvent::from_json(payload);
    let outcomes = state.inbound.handle_event(&event).await;
    debug!(object = ?event.object, messages = outcomes.len(), "webhook event handled");

    Ok(Json(json!({ "received": true })))
}
