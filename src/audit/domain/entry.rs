//! Command log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a command log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandLogId(Uuid);

impl CommandLogId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for CommandLogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommandLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One admin command attempt and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    /// Entry identifier.
    pub id: CommandLogId,
    /// Phone number of the admin who sent the command.
    pub actor: String,
    /// Command name as parsed, possibly unknown or empty.
    pub command: String,
    /// Arguments as parsed.
    pub args: BTreeMap<String, String>,
    /// Whether the command completed.
    pub succeeded: bool,
    /// Reply sent back to the admin.
    pub reply_text: Option<String>,
    /// Raw failure detail, never shown to the admin.
    pub error_message: Option<String>,
    /// When the command was handled.
    pub created_at: DateTime<Utc>,
}

impl CommandLogEntry {
    /// Starts an entry for `command` sent by `actor`, with no outcome yet.
    #[must_use]
    pub fn new(
        actor: impl Into<String>,
        command: impl Into<String>,
        args: BTreeMap<String, String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommandLogId::new(),
            actor: actor.into(),
            command: command.into(),
            args,
            succeeded: false,
            reply_text: None,
            error_message: None,
            created_at,
        }
    }

    /// Records the reply and whether the command succeeded.
    #[must_use]
    pub fn with_reply(mut self, text: impl Into<String>, succeeded: bool) -> Self {
        self.reply_text = Some(text.into());
        self.succeeded = succeeded;
        self
    }

    /// Records the raw failure detail.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}
