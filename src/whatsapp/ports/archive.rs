//! Inbound message archive.

use crate::whatsapp::domain::ArchivedMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Append-only store of inbound messages.
#[async_trait]
pub trait MessageArchive: Send + Sync {
    /// Stores one message.
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()>;

    /// Returns at most `limit` messages, newest first.
    async fn recent(&self, limit: usize) -> ArchiveResult<Vec<ArchivedMessage>>;
}

/// Errors returned by archive implementations.
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ArchiveError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
