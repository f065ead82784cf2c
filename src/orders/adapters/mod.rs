//! Adapter implementations for order persistence.

pub mod memory;
pub mod postgres;
