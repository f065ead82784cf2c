//! In-memory command log.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::CommandLogEntry,
    ports::{CommandLogError, CommandLogRepository, CommandLogResult},
};

/// Thread-safe in-memory command log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandLog {
    entries: Arc<RwLock<Vec<CommandLogEntry>>>,
}

impl InMemoryCommandLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry in append order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandLogError::Persistence`] when the state lock is
    /// poisoned.
    pub fn entries(&self) -> CommandLogResult<Vec<CommandLogEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.clone())
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> CommandLogError {
    CommandLogError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CommandLogRepository for InMemoryCommandLog {
    async fn append(&self, entry: &CommandLogEntry) -> CommandLogResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.push(entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> CommandLogResult<Vec<CommandLogEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        let mut newest: Vec<CommandLogEntry> = entries.iter().rev().cloned().collect();
        newest.sort_by_key(|entry| Reverse(entry.created_at));
        newest.truncate(limit);
        Ok(newest)
    }
}
