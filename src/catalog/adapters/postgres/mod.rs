//! `PostgreSQL` adapters for the product catalogue.

mod models;
mod repository;
mod schema;

pub use repository::PostgresProductRepository;
