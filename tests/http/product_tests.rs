//! Product creation route tests.

use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{ADMIN_TOKEN, TestApp, app, json_request};

async fn create(app: &TestApp, body: &Value) -> (StatusCode, Value) {
    app.send_json(json_request(Method::POST, "/api/products", body, Some(ADMIN_TOKEN)))
        .await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn product_is_created_with_derived_slug(app: TestApp) {
    let (status, body) = create(&app, &json!({ "name": "Chicken & Leek Pie", "price": 4.5 })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["slug"], json!("chicken-leek-pie"));
    assert_eq!(body["data"]["is_active"], json!(true));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn colliding_slug_gets_a_suffix(app: TestApp) {
    let draft = json!({ "name": "Sausage Roll", "slug": "sausage-roll", "price": "2.20" });

    let (first_status, first) = create(&app, &draft).await;
    let (second_status, second) = create(&app, &draft).await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_eq!(first["data"]["slug"], json!("sausage-roll"));
    let suffixed = second["data"]["slug"].as_str().expect("slug is a string");
    let suffix = suffixed
        .strip_prefix("sausage-roll-")
        .expect("retried slug keeps the base");
    assert_eq!(suffix.len(), 4);
    assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[rstest]
#[case(json!({ "price": 3 }))]
#[case(json!({ "name": "Scone" }))]
#[case(json!({ "name": "   ", "price": 3 }))]
#[tokio::test(flavor = "multi_thread")]
async fn name_and_price_are_required(app: TestApp, #[case] body: Value) {
    let (status, reply) = create(&app, &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, json!({ "error": "Name and price are required" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn negative_price_is_rejected(app: TestApp) {
    let (status, reply) = create(&app, &json!({ "name": "Scone", "price": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, json!({ "error": "Price must be greater than or equal to 0" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_requires_admin_token(app: TestApp) {
    let (status, _) = app
        .send_json(json_request(
            Method::POST,
            "/api/products",
            &json!({ "name": "Scone", "price": 3 }),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_routes_are_closed_without_configured_token() {
    let app = TestApp::with_config(&[]);

    let (status, _) = app
        .send_json(json_request(
            Method::POST,
            "/api/products",
            &json!({ "name": "Scone", "price": 3 }),
            Some(ADMIN_TOKEN),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
