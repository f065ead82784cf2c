//! Adapter implementations for the WhatsApp integration.

pub mod cloud_api;
pub mod memory;
pub mod postgres;
