//! Domain model for the WhatsApp integration.

mod admins;
mod archive;
mod payload;
mod verification;

pub use admins::{AdminAllowList, normalize_phone};
pub use archive::ArchivedMessage;
pub use payload::{
    ChangeValue, Contact, ContactProfile, InboundMessage, Metadata, ReceivedMessage, TextBody,
    WebhookChange, WebhookEntry, WebhookEvent,
};
pub use verification::{VerificationOutcome, VerificationRequest, verify_subscription};
