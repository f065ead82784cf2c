//! Maître: WhatsApp admin commands and checkout for a small food store.
//!
//! Staff manage the catalogue and orders by sending `/`-prefixed commands to
//! the store's WhatsApp number. The Cloud API delivers each message to the
//! webhook, the command is parsed and run against the store, the reply goes
//! back over WhatsApp and the attempt lands in an audit log. The same server
//! hosts the storefront's checkout and product creation routes.
//!
//! # Architecture
//!
//! Maître follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`command`]: Admin command grammar, dispatch and reply rendering
//! - [`catalog`]: Products and categories
//! - [`orders`]: Orders, line items and checkout
//! - [`audit`]: Record of every admin command attempt
//! - [`whatsapp`]: Webhook payloads, outbound replies and the inbound flow
//! - [`server`]: HTTP routes
//! - [`config`]: Process configuration
//! - [`app`]: Wiring of stores and services

pub mod app;
pub mod audit;
pub mod catalog;
pub mod command;
pub mod config;
pub mod orders;
pub mod postgres;
pub mod server;
pub mod whatsapp;

#[cfg(test)]
mod test_support;
