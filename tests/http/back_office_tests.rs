//! Back-office listing tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use maitre::server::WEBHOOK_PATH;
use rstest::rstest;
use serde_json::json;

use super::helpers::{ADMIN_PHONE, ADMIN_TOKEN, STRANGER_PHONE, TestApp, app, json_request, text_event};

fn listing(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request is well formed")
}

async fn deliver(app: &TestApp, messages: &[(&str, &str)]) {
    let (status, _) = app
        .send(json_request(Method::POST, WEBHOOK_PATH, &text_event(messages), None))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn command_log_lists_attempts_newest_first(app: TestApp) {
    deliver(&app, &[(ADMIN_PHONE, "/help")]).await;
    deliver(&app, &[(ADMIN_PHONE, "/stock ghost active")]).await;

    let (status, body) = app
        .send_json(listing("/api/admin/command-logs", Some(ADMIN_TOKEN)))
        .await;

    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().expect("data is a list");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["command"], json!("stock"));
    assert_eq!(entries[1]["command"], json!("help"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn message_archive_lists_every_inbound_message(app: TestApp) {
    deliver(&app, &[(STRANGER_PHONE, "Do you deliver on Sundays?"), (ADMIN_PHONE, "/help")]).await;

    let (status, body) = app
        .send_json(listing("/api/admin/messages", Some(ADMIN_TOKEN)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case("/api/admin/command-logs")]
#[case("/api/admin/messages")]
#[tokio::test(flavor = "multi_thread")]
async fn listings_require_admin_token(app: TestApp, #[case] uri: &str) {
    let (status, body) = app.send_json(listing(uri, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}
