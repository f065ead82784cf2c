//! Tests for the audit logger over the in-memory log.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::audit::{
    adapters::memory::InMemoryCommandLog, domain::CommandLogEntry, services::AuditLogger,
};
use chrono::{Duration, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn log() -> Arc<InMemoryCommandLog> {
    Arc::new(InMemoryCommandLog::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_appends_entry_unchanged(log: Arc<InMemoryCommandLog>) {
    let logger = AuditLogger::new(Arc::clone(&log));
    let args = BTreeMap::from([("name".to_owned(), "Pie".to_owned())]);
    let entry = CommandLogEntry::new("447700900123", "add", args, Utc::now())
        .with_reply("⚠️ Could not complete /add. Please try again later.", false)
        .with_error("duplicate product slug: pie");

    logger.record(&entry).await.expect("record should succeed");

    let stored = log.entries().expect("entries should be readable");
    assert_eq!(stored, vec![entry]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_returns_newest_first_up_to_limit(log: Arc<InMemoryCommandLog>) {
    let logger = AuditLogger::new(Arc::clone(&log));
    let start = Utc::now();
    for (offset, command) in ["help", "list", "orders"].into_iter().enumerate() {
        let at = start + Duration::seconds(i64::try_from(offset).expect("small offset"));
        let entry = CommandLogEntry::new("447700900123", command, BTreeMap::new(), at)
            .with_reply("ok", true);
        logger.record(&entry).await.expect("record should succeed");
    }

    let recent = logger.recent(2).await.expect("recent should succeed");

    let commands: Vec<&str> = recent.iter().map(|entry| entry.command.as_str()).collect();
    assert_eq!(commands, ["orders", "list"]);
}

#[rstest]
fn new_entry_has_no_outcome_until_reply_is_attached() {
    let entry = CommandLogEntry::new("1", "", BTreeMap::new(), Utc::now());

    assert!(!entry.succeeded);
    assert_eq!(entry.reply_text, None);
    assert_eq!(entry.error_message, None);
}
