//! Webhook payload sent by the WhatsApp Cloud API.
//!
//! Only the fields the inbound flow reads are modelled. Everything is
//! optional or defaulted: Meta also posts status updates and other change
//! kinds through the same endpoint, and those must decode to "nothing to
//! do" rather than fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Top-level webhook body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Usually `whatsapp_business_account`.
    #[serde(default)]
    pub object: Option<String>,
    /// One entry per business account.
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

/// Changes reported for one business account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEntry {
    /// Business account identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Reported changes.
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

/// One change notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookChange {
    /// Changed field, `messages` for chat traffic.
    #[serde(default)]
    pub field: Option<String>,
    /// Change body.
    #[serde(default)]
    pub value: ChangeValue,
}

/// Body of a `messages` change.
///
/// Messages are kept as raw JSON so each one can be archived exactly as
/// received and decoded on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeValue {
    /// Receiving business number.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Sender profiles.
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Inbound messages.
    #[serde(default)]
    pub messages: Vec<Value>,
}

/// Business number that received the change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display form of the business phone number.
    #[serde(default)]
    pub display_phone_number: Option<String>,
    /// Cloud API phone-number identifier.
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

/// Sender profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Sender WhatsApp identifier, normally the phone number.
    #[serde(default)]
    pub wa_id: Option<String>,
    /// Public profile.
    #[serde(default)]
    pub profile: Option<ContactProfile>,
}

/// Public profile of a sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message identifier assigned by WhatsApp.
    pub id: String,
    /// Sender phone number, without a leading `+`.
    pub from: String,
    /// Unix timestamp as a decimal string.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Message type such as `text`, `image` or `button`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Text content for `text` messages.
    #[serde(default)]
    pub text: Option<TextBody>,
}

impl InboundMessage {
    /// Returns the text body when this is a text message.
    #[must_use]
    pub fn text_body(&self) -> Option<&str> {
        self.text.as_ref().map(|text| text.body.as_str())
    }
}

/// Text content of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    /// Message text.
    pub body: String,
}

/// A decoded inbound message with the context the inbound flow needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedMessage {
    /// The decoded message.
    pub message: InboundMessage,
    /// The message JSON exactly as received.
    pub raw: Value,
    /// Business number that received it.
    pub to: Option<String>,
    /// Sender profile name from the first contact.
    pub profile_name: Option<String>,
}

impl WebhookEvent {
    /// Decodes a webhook body, treating any unexpected shape as empty.
    #[must_use]
    pub fn from_json(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_else(|err| {
            debug!(error = %err, "webhook body has no usable entries");
            Self::default()
        })
    }

    /// Returns every decodable message across all entries and changes, in
    /// payload order.
    #[must_use]
    pub fn messages(&self) -> Vec<ReceivedMessage> {
        self.entry
            .iter()
            .flat_map(|entry| &entry.changes)
            .flat_map(|change| {
                let value = &change.value;
                let to = value
                    .metadata
                    .as_ref()
                    .and_then(|metadata| metadata.display_phone_number.clone());
                let profile_name = value
                    .contacts
                    .first()
                    .and_then(|contact| contact.profile.as_ref())
                    .and_then(|profile| profile.name.clone());

                value.messages.iter().filter_map(move |raw| {
                    match serde_json::from_value::<InboundMessage>(raw.clone()) {
                        Ok(message) => Some(ReceivedMessage {
                            message,
                            raw: raw.clone(),
                            to: to.clone(),
                            profile_name: profile_name.clone(),
                        }),
                        Err(err) => {
                            debug!(error = %err, "skipping undecodable webhook message");
                            None
                        }
                    }
                })
            })
            .collect()
    }
}
