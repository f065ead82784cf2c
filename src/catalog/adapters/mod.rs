//! Adapter implementations for the product catalogue ports.

pub mod memory;
pub mod postgres;
