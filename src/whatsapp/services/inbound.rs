//! Inbound webhook messages to command replies.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::audit::{domain::CommandLogEntry, ports::CommandLogRepository, services::AuditLogger};
use crate::catalog::ports::ProductRepository;
use crate::command::{domain::CommandInvocation, services::CommandDispatcher};
use crate::orders::ports::OrderRepository;
use crate::whatsapp::{
    domain::{AdminAllowList, ArchivedMessage, ReceivedMessage, WebhookEvent},
    ports::{MessageArchive, Notifier},
};

/// Reply sent when someone off the allow-list sends a command.
pub const NOT_AUTHORIZED_REPLY: &str = "⛔ You are not authorized to use admin commands.";

/// What happened to one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Not a text message starting with `/`.
    Ignored,
    /// A command from a phone off the allow-list.
    Refused,
    /// A command from an admin was dispatched and recorded.
    Handled {
        /// Whether the command completed.
        succeeded: bool,
        /// Whether the reply was accepted by the notifier.
        delivered: bool,
    },
}

/// Handles every message in a webhook event.
///
/// Nothing here fails: archive, notifier and audit failures are logged and
/// the remaining steps still run, so the webhook can always acknowledge.
pub struct InboundService {
    admins: AdminAllowList,
    dispatcher: CommandDispatcher<dyn ProductRepository, dyn OrderRepository>,
    notifier: Arc<dyn Notifier>,
    audit: AuditLogger<dyn CommandLogRepository>,
    archive: Arc<dyn MessageArchive>,
    clock: Arc<dyn Clock>,
}

impl InboundService {
    /// Wires the inbound flow together.
    #[must_use]
    pub const fn new(
        admins: AdminAllowList,
        dispatcher: CommandDispatcher<dyn ProductRepository, dyn OrderRepository>,
        notifier: Arc<dyn Notifier>,
        audit: AuditLogger<dyn CommandLogRepository>,
        archive: Arc<dyn MessageArchive>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admins,
            dispatcher,
            notifier,
            audit,
            archive,
            clock,
        }
    }

    /// Handles every message in `event`, in payload order.
    pub async fn handle_event(&self, event: &WebhookEvent) -> Vec<MessageOutcome> {
        let messages = event.messages();
        if messages.is_empty() {
            debug!("webhook event carries no messages");
        }

        let mut outcomes = Vec::with_capacity(messages.len());
        for received in &messages {
            outcomes.push(self.handle_message(received).await);
        }
        outcomes
    }

    /// Archives one message and, when it is a command, runs it.
    pub async fn handle_message(&self, received: &ReceivedMessage) -> MessageOutcome {
        self.archive_message(received).await;

        let message = &received.message;
        let Some(invocation) = message.text_body().and_then(CommandInvocation::parse) else {
            return MessageOutcome::Ignored;
        };
        let sender = message.from.as_str();

        if !self.admins.contains(sender) {
            info!(from = sender, command = invocation.name(), "command from unlisted phone refused");
            self.reply(sender, NOT_AUTHORIZED_REPLY).await;
            return MessageOutcome::Refused;
        }

        let reply = self.dispatcher.dispatch(&invocation, sender).await;
        let delivered = self.reply(sender, &reply.text).await;

        let mut entry = CommandLogEntry::new(
            sender,
            invocation.name(),
            invocation.audit_args(),
            self.clock.utc(),
        )
        .with_reply(reply.text.as_str(), reply.succeeded);
        if let Some(detail) = reply.error_message.as_deref() {
            entry = entry.with_error(detail);
        }
        if let Err(err) = self.audit.record(&entry).await {
            warn!(error = %err, command = %entry.command, "failed to record command attempt");
        }

        MessageOutcome::Handled {
            succeeded: reply.succeeded,
            delivered,
        }
    }

    /// Returns the audit logger, for back-office listings.
    #[must_use]
    pub const fn audit(&self) -> &AuditLogger<dyn CommandLogRepository> {
        &self.audit
    }

    /// Returns the message archive, for back-office listings.
    #[must_use]
    pub fn archive(&self) -> &dyn MessageArchive {
        self.archive.as_ref()
    }

    async fn reply(&self, to: &str, text: &str) -> bool {
        match self.notifier.send(to, text).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, to, "reply not delivered");
                false
            }
        }
    }

    async fn archive_message(&self, received: &ReceivedMessage) {
        let message = &received.message;
        let archived = ArchivedMessage {
            wa_message_id: message.id.clone(),
            from: message.from.clone(),
            to: received.to.clone(),
            profile_name: received.profile_name.clone(),
            message_type: message.kind.clone(),
            text: message.text_body().map(str::to_owned),
            raw: received.raw.clone(),
            received_at: self.clock.utc(),
        };
        if let Err(err) = self.archive.store(&archived).await {
            warn!(error = %err, message_id = %archived.wa_message_id, "failed to archive inbound message");
        }
    }
}
