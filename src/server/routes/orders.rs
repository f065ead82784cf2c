//! Checkout and order status routes.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use super::require_admin;
use crate::orders::{
    domain::{CustomerDetails, NewOrder, NewOrderItem, OrderId, OrderStatus},
    services::CheckoutError,
};
use crate::server::{error::ApiError, state::AppState};

/// Checkout form as posted by the storefront.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    customer_name: String,
    #[serde(default)]
    customer_phone: String,
    #[serde(default)]
    customer_email: Option<String>,
    #[serde(default)]
    delivery_address: String,
    #[serde(default)]
    special_instructions: Option<String>,
    #[serde(default)]
    items: Vec<NewOrderItem>,
    #[serde(default)]
    total_amount: Decimal,
}

impl CheckoutRequest {
    fn into_order(self) -> Result<NewOrder, CheckoutError> {
        let customer = CustomerDetails {
            name: self.customer_name.trim().to_owned(),
            phone: self.customer_phone.trim().to_owned(),
            email: self.customer_email.filter(|email| !email.trim().is_empty()),
            delivery_address: self.delivery_address.trim().to_owned(),
            special_instructions: self
                .special_instructions
                .filter(|notes| !notes.trim().is_empty()),
        };
        Ok(NewOrder::new(customer, self.items, self.total_amount)?)
    }
}

/// Staff request to move an order to another status.
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Places an order from the storefront checkout.
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let placed = match request.into_order() {
        Ok(order) => state.checkout.place(&order).await,
        Err(err) => Err(err),
    };

    match placed {
        Ok(order) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "order": {
                    "id": order.id,
                    "order_number": order.order_number,
                    "status": order.status,
                    "created_at": order.created_at,
                },
            })),
        )),
        Err(CheckoutError::Domain(err)) => Err(ApiError::bad_request(err.to_string())),
        Err(CheckoutError::Repository(err)) => {
            error!(error = %err, "failed to create order");
            Err(ApiError::internal("Failed to create order"))
        }
    }
}

/// Sets the status of an order. Requires the admin token.
pub async fn change_order_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<StatusChangeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    require_admin(&state, &headers)?;
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let (Some(raw_id), Some(raw_status)) = (
        request.id.filter(|id| !id.trim().is_empty()),
        request.status.filter(|status| !status.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request("Order ID and status are required"));
    };
    let status =
        OrderStatus::try_from(raw_status.as_str()).map_err(|_| ApiError::bad_request("Invalid status"))?;
    let not_found = || ApiError::NotFound("Order not found".to_owned());
    let id = Uuid::parse_str(raw_id.trim())
        .map(OrderId::from_uuid)
        .map_err(|_| not_found())?;

    let updated = state.checkout.set_status(id, status).await.map_err(|err| {
        error!(error = %err, order_id = %raw_id, "failed to update order");
        ApiError::internal("Failed to update order")
    })?;
    let order = updated.ok_or_else(not_found)?;
    info!(order_number = %order.order_number, status = %order.status, "order status changed");

    Ok(Json(json!({ "order": order })))
}
