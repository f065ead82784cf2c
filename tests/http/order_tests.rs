//! Checkout and order status route tests.

use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{ADMIN_TOKEN, TestApp, app, checkout_body, json_request};

async fn place(app: &TestApp) -> Value {
    let (status, body) = app
        .send_json(json_request(Method::POST, "/api/orders", &checkout_body(), None))
        .await;
    assert_eq!(status, StatusCode::CREATED, "body was {body}");
    body
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checkout_creates_pending_order(app: TestApp) {
    let body = place(&app).await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["order"]["status"], json!("pending"));
    let number = body["order"]["order_number"]
        .as_str()
        .expect("order number is a string");
    assert!(number.starts_with("ORD-"), "order number was {number}");
    assert!(body["order"]["id"].is_string());
    assert!(body["order"]["created_at"].is_string());
}

#[rstest]
#[case("customer_name")]
#[case("customer_phone")]
#[case("delivery_address")]
#[tokio::test(flavor = "multi_thread")]
async fn checkout_without_contact_details_is_rejected(app: TestApp, #[case] field: &str) {
    let mut body = checkout_body();
    body[field] = json!("  ");

    let (status, reply) = app
        .send_json(json_request(Method::POST, "/api/orders", &body, None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply,
        json!({ "error": "Missing required fields: customer_name, customer_phone, delivery_address" })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checkout_without_items_is_rejected(app: TestApp) {
    let mut body = checkout_body();
    body["items"] = json!([]);

    let (status, reply) = app
        .send_json(json_request(Method::POST, "/api/orders", &body, None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, json!({ "error": "Order must contain at least one item" }));
}

#[rstest]
#[case(None)]
#[case(Some("not-the-token"))]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_requires_admin_token(app: TestApp, #[case] token: Option<&str>) {
    let body = json!({ "id": "0b8f8a1e-3f5c-4a57-9a55-4c1d5b3f8e21", "status": "ready" });

    let (status, reply) = app
        .send_json(json_request(Method::PATCH, "/api/orders", &body, token))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply, json!({ "error": "Unauthorized" }));
}

#[rstest]
#[case(json!({ "status": "ready" }), "Order ID and status are required")]
#[case(json!({ "id": "0b8f8a1e-3f5c-4a57-9a55-4c1d5b3f8e21" }), "Order ID and status are required")]
#[case(json!({ "id": "0b8f8a1e-3f5c-4a57-9a55-4c1d5b3f8e21", "status": "shipped" }), "Invalid status")]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_validates_body(app: TestApp, #[case] body: Value, #[case] message: &str) {
    let (status, reply) = app
        .send_json(json_request(Method::PATCH, "/api/orders", &body, Some(ADMIN_TOKEN)))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, json!({ "error": message }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_for_unknown_order_is_not_found(app: TestApp) {
    let body = json!({ "id": "0b8f8a1e-3f5c-4a57-9a55-4c1d5b3f8e21", "status": "ready" });

    let (status, _) = app
        .send_json(json_request(Method::PATCH, "/api/orders", &body, Some(ADMIN_TOKEN)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_updates_placed_order(app: TestApp) {
    let placed = place(&app).await;
    let body = json!({ "id": placed["order"]["id"], "status": "confirmed" });

    let (status, reply) = app
        .send_json(json_request(Method::PATCH, "/api/orders", &body, Some(ADMIN_TOKEN)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["order"]["status"], json!("confirmed"));
    assert_eq!(reply["order"]["order_number"], placed["order"]["order_number"]);
}
