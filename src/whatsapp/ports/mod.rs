//! Port contracts for the WhatsApp integration.

pub mod archive;
pub mod notifier;

pub use archive::{ArchiveError, ArchiveResult, MessageArchive};
pub use notifier::{Notifier, NotifyError, NotifyResult};
