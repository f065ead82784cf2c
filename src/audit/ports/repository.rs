//! Repository port for command log persistence.

use crate::audit::domain::CommandLogEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for command log operations.
pub type CommandLogResult<T> = Result<T, CommandLogError>;

/// Append-only command log store.
#[async_trait]
pub trait CommandLogRepository: Send + Sync {
    /// Appends an entry.
    async fn append(&self, entry: &CommandLogEntry) -> CommandLogResult<()>;

    /// Returns at most `limit` entries, newest first.
    async fn recent(&self, limit: usize) -> CommandLogResult<Vec<CommandLogEntry>>;
}

/// Errors returned by command log implementations.
#[derive(Debug, Clone, Error)]
pub enum CommandLogError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommandLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
