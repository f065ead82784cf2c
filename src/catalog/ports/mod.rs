//! Port contracts for the product catalogue.
//!
//! Ports define infrastructure-agnostic interfaces used by catalogue services
//! and admin command handlers.

pub mod repository;

pub use repository::{ProductRepository, ProductRepositoryError, ProductRepositoryResult};
