//! WhatsApp Cloud API integration.
//!
//! Covers the webhook payload model and the subscription handshake, the
//! outbound text notifier, the archive of inbound messages, and the flow
//! that turns an inbound admin message into a command reply:
//!
//! - Payload, handshake and allow-list types in [`domain`]
//! - Notifier and archive ports in [`ports`]
//! - Cloud API, in-memory and `PostgreSQL` adapters in [`adapters`]
//! - The inbound message flow in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
