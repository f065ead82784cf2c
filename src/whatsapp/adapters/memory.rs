//! In-memory notifier and archive for tests and local runs.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use crate::whatsapp::{
    domain::ArchivedMessage,
    ports::{
        ArchiveError, ArchiveResult, MessageArchive, Notifier, NotifyError, NotifyResult,
    },
};

/// A message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Recipient phone number.
    pub to: String,
    /// Message text.
    pub text: String,
}

/// Notifier that records messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<SentMessage>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded message in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, to: &str, text: &str) -> NotifyResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;
        sent.push(SentMessage {
            to: to.to_owned(),
            text: text.to_owned(),
        });
        Ok(())
    }
}

/// Thread-safe in-memory message archive.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageArchive {
    messages: Arc<RwLock<Vec<ArchivedMessage>>>,
}

impl InMemoryMessageArchive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> ArchiveError {
    ArchiveError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MessageArchive for InMemoryMessageArchive {
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()> {
        let mut messages = self.messages.write().map_err(lock_error)?;
        messages.push(message.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> ArchiveResult<Vec<ArchivedMessage>> {
        let messages = self.messages.read().map_err(lock_error)?;
        let mut newest: Vec<ArchivedMessage> = messages.iter().rev().cloned().collect();
        newest.sort_by_key(|message| Reverse(message.received_at));
        newest.truncate(limit);
        Ok(newest)
    }
}
