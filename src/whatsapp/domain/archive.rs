//! Archived inbound messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound message as kept for the back-office message view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedMessage {
    /// Message identifier assigned by WhatsApp.
    pub wa_message_id: String,
    /// Sender phone number.
    pub from: String,
    /// Business phone number the message was sent to.
    pub to: Option<String>,
    /// Sender profile name.
    pub profile_name: Option<String>,
    /// WhatsApp message type such as `text` or `image`.
    pub message_type: String,
    /// Text body for text messages.
    pub text: Option<String>,
    /// The message object exactly as received.
    pub raw: serde_json::Value,
    /// When the webhook delivered the message.
    pub received_at: DateTime<Utc>,
}
