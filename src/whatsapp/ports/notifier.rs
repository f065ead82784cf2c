//! Outbound text messages.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Sends a text message to a chat user.
///
/// Exactly one send is attempted per call; callers never retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the phone number `to`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when the message was not accepted.
    async fn send(&self, to: &str, text: &str) -> NotifyResult<()>;
}

/// Reasons a reply was not delivered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// Access token or sender number is missing.
    #[error("notifier is not configured")]
    NotConfigured,

    /// The API answered with a non-success status.
    #[error("message send rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The request never completed.
    #[error("message send failed: {0}")]
    Transport(String),
}
