//! Shared router fixture and request helpers.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use maitre::app::{Stores, build_state};
use maitre::audit::adapters::memory::InMemoryCommandLog;
use maitre::config::AppConfig;
use maitre::server::router;
use maitre::whatsapp::adapters::memory::{InMemoryMessageArchive, RecordingNotifier};
use rstest::fixture;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Sender on the admin allow-list, as WhatsApp reports it.
pub const ADMIN_PHONE: &str = "447700900123";
/// Sender that is not an admin.
pub const STRANGER_PHONE: &str = "447700900999";
/// Token the subscription handshake must echo.
pub const VERIFY_TOKEN: &str = "meat-pie-handshake";
/// Bearer token for the back-office routes.
pub const ADMIN_TOKEN: &str = "back-office";

/// Router over fresh in-memory stores, with handles on what it records.
pub struct TestApp {
    /// Router under test.
    pub router: Router,
    /// Replies the webhook tried to send.
    pub notifier: RecordingNotifier,
    /// Audit log shared with the router.
    pub command_log: InMemoryCommandLog,
    /// Message archive shared with the router.
    pub archive: InMemoryMessageArchive,
}

impl TestApp {
    /// Builds the app from `(key, value)` configuration pairs.
    pub fn with_config(pairs: &[(&str, &str)]) -> Self {
        let config = AppConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| (*value).to_owned())
        })
        .expect("test configuration is valid");

        let notifier = RecordingNotifier::new();
        let command_log = InMemoryCommandLog::new();
        let archive = InMemoryMessageArchive::new();
        let stores = Stores {
            command_log: Arc::new(command_log.clone()),
            archive: Arc::new(archive.clone()),
            ..Stores::in_memory()
        };

        let state = build_state(&config, stores, Arc::new(notifier.clone()));
        Self {
            router: router(state),
            notifier,
            command_log,
            archive,
        }
    }

    /// Sends `request` and returns the status and raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        (status, body.to_vec())
    }

    /// Sends `request` and parses the body as JSON.
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(request).await;
        let value = serde_json::from_slice(&body).expect("body is JSON");
        (status, value)
    }
}

/// App configured with a verify token, one admin and an admin API token.
#[fixture]
pub fn app() -> TestApp {
    TestApp::with_config(&[
        ("WHATSAPP_VERIFY_TOKEN", VERIFY_TOKEN),
        ("WHATSAPP_ADMIN_PHONES", "+447700900123"),
        ("ADMIN_API_TOKEN", ADMIN_TOKEN),
    ])
}

/// Builds a JSON request, optionally with a bearer token.
pub fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request is well formed")
}

/// Builds a webhook delivery carrying one text message per `(from, body)`.
pub fn text_event(messages: &[(&str, &str)]) -> Value {
    let messages: Vec<Value> = messages
        .iter()
        .enumerate()
        .map(|(index, (from, body))| {
            json!({
                "from": from,
                "id": format!("wamid.HBgL{index}"),
                "timestamp": "1718000000",
                "type": "text",
                "text": { "body": body }
            })
        })
        .collect();

    json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "102290129340398",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                        "display_phone_number": "15550783881",
                        "phone_number_id": "106540352242922"
                    },
                    "contacts": [{ "profile": { "name": "Ines" }, "wa_id": "447700900123" }],
                    "messages": messages
                }
            }]
        }]
    })
}

/// A checkout body with one line item.
pub fn checkout_body() -> Value {
    json!({
        "customer_name": "Ines Duarte",
        "customer_phone": "+447700900555",
        "customer_email": "ines@example.com",
        "delivery_address": "12 Market Street",
        "items": [{
            "product_name": "Chicken Pie",
            "product_price": "4.50",
            "quantity": 2,
            "total_price": "9.00",
            "product_slug": "chicken-pie"
        }],
        "total_amount": "9.00"
    })
}
