//! Product catalogue for the storefront.
//!
//! The catalogue owns product records and the category lookup used when a
//! product is filed under a category. Admin commands and the product API
//! both reach the store through the [`ports::ProductRepository`] port:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
