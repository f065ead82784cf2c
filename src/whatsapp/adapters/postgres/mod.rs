//! `PostgreSQL` adapter for the inbound message archive.

mod models;
mod repository;
mod schema;

pub use repository::PostgresMessageArchive;
