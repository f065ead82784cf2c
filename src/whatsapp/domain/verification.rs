//! Webhook subscription handshake.

use serde::Deserialize;

/// Query parameters sent by Meta when (re)subscribing the webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerificationRequest {
    /// Expected to be `subscribe`.
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// Shared secret configured in the Meta app dashboard.
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// Value to echo back on success.
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Result of checking a [`VerificationRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// No verify token is configured on this side.
    NotConfigured,
    /// The handshake matched; echo the challenge.
    Verified(String),
    /// Wrong mode, wrong token or no challenge.
    Forbidden,
}

/// Checks a subscription handshake against the configured token.
#[must_use]
pub fn verify_subscription(
    request: &VerificationRequest,
    configured_token: Option<&str>,
) -> VerificationOutcome {
    let Some(expected) = configured_token else {
        return VerificationOutcome::NotConfigured;
    };

    match (
        request.mode.as_deref(),
        request.verify_token.as_deref(),
        request.challenge.as_deref(),
    ) {
        (Some("subscribe"), Some(token), Some(challenge))
            if token == expected && !challenge.is_empty() =>
        {
            VerificationOutcome::Verified(challenge.to_owned())
        }
        _ => VerificationOutcome::Forbidden,
    }
}
