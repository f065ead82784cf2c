//! Orchestration services for the WhatsApp integration.

mod inbound;

pub use inbound::{InboundService, MessageOutcome, NOT_AUTHORIZED_REPLY};
