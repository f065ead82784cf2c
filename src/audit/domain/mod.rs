//! Domain model for the command audit trail.

mod entry;

pub use entry::{CommandLogEntry, CommandLogId};
