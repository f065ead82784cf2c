//! Webhook handshake and delivery tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use maitre::server::WEBHOOK_PATH;
use maitre::whatsapp::{ports::MessageArchive, services::NOT_AUTHORIZED_REPLY};
use rstest::rstest;
use serde_json::json;

use super::helpers::{ADMIN_PHONE, STRANGER_PHONE, TestApp, VERIFY_TOKEN, app, json_request, text_event};

fn handshake(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("{WEBHOOK_PATH}?{query}"))
        .body(Body::empty())
        .expect("request is well formed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn handshake_echoes_challenge_when_token_matches(app: TestApp) {
    let query = format!("hub.mode=subscribe&hub.verify_token={VERIFY_TOKEN}&hub.challenge=1158201444");

    let (status, body) = app.send(handshake(&query)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"1158201444");
}

#[rstest]
#[case("hub.mode=subscribe&hub.verify_token=wrong&hub.challenge=1158201444")]
#[case("hub.mode=unsubscribe&hub.verify_token=wrong&hub.challenge=1158201444")]
#[case("hub.verify_token=wrong")]
#[case("hub.mode=subscribe&hub.challenge=1158201444")]
#[tokio::test(flavor = "multi_thread")]
async fn handshake_with_wrong_token_is_forbidden(app: TestApp, #[case] query: &str) {
    let (status, body) = app.send_json(handshake(query)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Forbidden" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn handshake_without_configured_token_is_a_server_error() {
    let app = TestApp::with_config(&[]);

    let (status, body) = app
        .send_json(handshake("hub.mode=subscribe&hub.verify_token=x&hub.challenge=1"))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server not configured" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delivery_that_is_not_json_is_rejected(app: TestApp) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(WEBHOOK_PATH)
        .body(Body::from("entry=1"))
        .expect("request is well formed");

    let (status, body) = app.send_json(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Bad Request" }));
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "object": "whatsapp_business_account" }))]
#[case(json!({ "entry": "not-a-list" }))]
#[case(json!([1, 2, 3]))]
#[tokio::test(flavor = "multi_thread")]
async fn any_json_delivery_is_acknowledged(app: TestApp, #[case] payload: serde_json::Value) {
    let (status, body) = app
        .send_json(json_request(Method::POST, WEBHOOK_PATH, &payload, None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "received": true }));
    assert!(app.notifier.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_command_is_answered_and_logged(app: TestApp) {
    let event = text_event(&[(ADMIN_PHONE, "/add name=Pie price=50")]);

    let (status, body) = app
        .send_json(json_request(Method::POST, WEBHOOK_PATH, &event, None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "received": true }));

    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, ADMIN_PHONE);
    assert!(sent[0].text.contains("Slug: pie"), "reply was {}", sent[0].text);
    assert!(sent[0].text.contains("Price: 50"), "reply was {}", sent[0].text);

    let entries = app.command_log.entries().expect("log readable");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].command, "add");
    assert!(entries[0].succeeded);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn command_from_unlisted_phone_is_refused_without_log(app: TestApp) {
    let event = text_event(&[(STRANGER_PHONE, "/list type=products")]);

    let (status, _) = app
        .send_json(json_request(Method::POST, WEBHOOK_PATH, &event, None))
        .await;

    assert_eq!(status, StatusCode::OK);
    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, NOT_AUTHORIZED_REPLY);
    assert!(app.command_log.entries().expect("log readable").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_message_is_archived(app: TestApp) {
    let event = text_event(&[
        (STRANGER_PHONE, "Hello, are you open today?"),
        (ADMIN_PHONE, "/help"),
    ]);

    app.send(json_request(Method::POST, WEBHOOK_PATH, &event, None))
        .await;

    let archived = app.archive.recent(100).await.expect("archive readable");
    assert_eq!(archived.len(), 2);
    assert!(archived.iter().all(|message| message.to.as_deref() == Some("15550783881")));
    assert_eq!(app.notifier.sent().len(), 1);
}
