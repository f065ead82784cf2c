//! Command failures and their chat wording.

use super::CommandKind;
use thiserror::Error;

/// Why a command did not complete.
///
/// `Display` is the text sent back to the admin. Only [`CommandError::Fault`]
/// carries detail that is kept out of the chat and written to the audit
/// trail instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing followed the leading `/`.
    #[error("❓ Empty command. Send /help to see what I understand.")]
    EmptyName,

    /// The name matches no known command.
    #[error("❓ Unknown command /{0}. Send /help to see what I understand.")]
    UnknownCommand(String),

    /// Required arguments are missing or malformed.
    #[error("Use: {}", .0.usage())]
    Usage(CommandKind),

    /// A price is not a non-negative number.
    #[error("❌ Invalid price '{0}'. Use a number of at least 0, such as price=12.50")]
    InvalidPrice(String),

    /// An order status is outside the fixed set.
    #[error(
        "❌ Invalid status '{0}'. Use one of: pending, confirmed, preparing, ready, delivered, cancelled"
    )]
    InvalidStatus(String),

    /// A field value in `/update` cannot be read.
    #[error("❌ Invalid value '{value}' for {field}.")]
    InvalidValue {
        /// Field name as typed.
        field: String,
        /// Rejected value.
        value: String,
    },

    /// No product has the slug.
    #[error("❌ Product '{0}' not found.")]
    ProductNotFound(String),

    /// No category has the slug.
    #[error("❌ Category '{0}' not found.")]
    CategoryNotFound(String),

    /// No order has the number.
    #[error("❌ Order {0} not found.")]
    OrderNotFound(String),

    /// The store or the reply template failed.
    #[error("⚠️ Could not complete /{}. Please try again later.", .command.name())]
    Fault {
        /// Command that was running.
        command: CommandKind,
        /// Raw failure, kept for the audit trail.
        detail: String,
    },
}

impl CommandError {
    /// Builds a [`CommandError::Fault`] from any displayable failure.
    pub fn fault(command: CommandKind, err: impl std::fmt::Display) -> Self {
        Self::Fault {
            command,
            detail: err.to_string(),
        }
    }

    /// Returns the detail to record in the audit trail, if any.
    #[must_use]
    pub fn audit_detail(&self) -> Option<&str> {
        match self {
            Self::Fault { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
