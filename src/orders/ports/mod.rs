//! Port contracts for order persistence.

pub mod repository;

pub use repository::{OrderRepository, OrderRepositoryError, OrderRepositoryResult};
