//! Orchestration services for the command audit trail.

mod logger;

pub use logger::AuditLogger;
