//! `PostgreSQL` adapter for the command audit trail.

mod models;
mod repository;
mod schema;

pub use repository::PostgresCommandLog;
