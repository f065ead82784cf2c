//! Port contracts for the command audit trail.

pub mod repository;

pub use repository::{CommandLogError, CommandLogRepository, CommandLogResult};
