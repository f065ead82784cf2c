//! `PostgreSQL` adapters for orders.

mod models;
mod repository;
mod schema;

pub use repository::PostgresOrderRepository;
