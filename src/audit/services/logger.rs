//! Audit logger used by the inbound command flow.

use crate::audit::{
    domain::CommandLogEntry,
    ports::{CommandLogRepository, CommandLogResult},
};
use std::sync::Arc;
use tracing::debug;

/// Records command attempts and reads them back for the back office.
///
/// Failures are returned, not raised: the inbound flow logs them and carries
/// on, so a broken audit store never delays the reply or the webhook
/// acknowledgement.
pub struct AuditLogger<R>
where
    R: CommandLogRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> AuditLogger<R>
where
    R: CommandLogRepository + ?Sized,
{
    /// Creates a new audit logger.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends one entry.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged.
    pub async fn record(&self, entry: &CommandLogEntry) -> CommandLogResult<()> {
        self.repository.append(entry).await?;
        debug!(
            actor = %entry.actor,
            command = %entry.command,
            succeeded = entry.succeeded,
            "command attempt recorded"
        );
        Ok(())
    }

    /// Returns at most `limit` entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged.
    pub async fn recent(&self, limit: usize) -> CommandLogResult<Vec<CommandLogEntry>> {
        self.repository.recent(limit).await
    }
}
