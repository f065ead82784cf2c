//! Adapter implementations for the command audit trail.

pub mod memory;
pub mod postgres;
