//! Route handlers.

mod back_office;
mod orders;
mod products;
mod webhook;

pub use back_office::{BACK_OFFICE_LIMIT, list_command_logs, list_messages};
pub use orders::{change_order_status, place_order};
pub use products::create_product;
pub use webhook::{receive_webhook, verify_webhook};

use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::error::ApiError;
use super::state::AppState;

/// Checks the `Authorization: Bearer <token>` header against the admin token.
///
/// Every request is refused when no admin token is configured.
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Err(ApiError::Unauthorized);
    };
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match presented {
        Some(token) if token == expected => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}
