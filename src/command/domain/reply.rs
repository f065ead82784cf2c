//! Outcome of one dispatched command.

use super::CommandError;
use serde::Serialize;

/// Reply text plus the facts the audit trail needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReply {
    /// Text sent back to the admin.
    pub text: String,
    /// Whether the command completed.
    pub succeeded: bool,
    /// Raw failure detail, never sent to the admin.
    pub error_message: Option<String>,
}

impl CommandReply {
    /// A successful reply.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
            error_message: None,
        }
    }

    /// A failed reply worded by `error`.
    #[must_use]
    pub fn failure(error: &CommandError) -> Self {
        Self {
            text: error.to_string(),
            succeeded: false,
            error_message: error.audit_detail().map(str::to_owned),
        }
    }
}

impl From<Result<String, CommandError>> for CommandReply {
    fn from(outcome: Result<String, CommandError>) -> Self {
        match outcome {
            Ok(text) => Self::success(text),
            Err(error) => Self::failure(&error),
        }
    }
}
