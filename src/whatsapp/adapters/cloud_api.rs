//! WhatsApp Cloud API notifier.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::whatsapp::ports::{Notifier, NotifyError, NotifyResult};

/// Default Graph API base URL.
pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v21.0";

/// Settings for [`CloudApiNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudApiSettings {
    /// Graph API base URL without a trailing slash.
    pub api_base: String,
    /// Sender phone-number identifier.
    pub phone_number_id: Option<String>,
    /// Bearer token for the Graph API.
    pub access_token: Option<String>,
}

impl Default for CloudApiSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            phone_number_id: None,
            access_token: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendTextRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextPayload<'a>,
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    body: &'a str,
}

/// Sends text messages through `POST {api_base}/{phone_number_id}/messages`.
#[derive(Debug, Clone)]
pub struct CloudApiNotifier {
    client: reqwest::Client,
    settings: CloudApiSettings,
}

impl CloudApiNotifier {
    /// Creates a notifier with its own HTTP client.
    #[must_use]
    pub fn new(settings: CloudApiSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Creates a notifier sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, settings: CloudApiSettings) -> Self {
        Self { client, settings }
    }

    fn endpoint(&self) -> Option<(String, &str)> {
        let phone_number_id = self.settings.phone_number_id.as_deref()?;
        let token = self.settings.access_token.as_deref()?;
        let base = self.settings.api_base.trim_end_matches('/');
        Some((format!("{base}/{phone_number_id}/messages"), token))
    }
}

#[async_trait]
impl Notifier for CloudApiNotifier {
    async fn send(&self, to: &str, text: &str) -> NotifyResult<()> {
        let Some((url, token)) = self.endpoint() else {
            warn!("WhatsApp access token or phone number id not set; reply not sent");
            return Err(NotifyError::NotConfigured);
        };

        let payload = SendTextRequest {
            messaging_product: "whatsapp",
            to,
            kind: "text",
            text: TextPayload { body: text },
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(to, "reply sent");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
