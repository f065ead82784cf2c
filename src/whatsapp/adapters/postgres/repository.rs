//! `PostgreSQL` message archive implementation.

use super::{models::MessageRow, schema::whatsapp_messages};
use crate::postgres::{PgPool, run_blocking};
use crate::whatsapp::{
    domain::ArchivedMessage,
    ports::{ArchiveError, ArchiveResult, MessageArchive},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed message archive.
#[derive(Debug, Clone)]
pub struct PostgresMessageArchive {
    pool: PgPool,
}

impl PostgresMessageArchive {
    /// Creates a new archive from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageArchive for PostgresMessageArchive {
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()> {
        let row = MessageRow {
            id: uuid::Uuid::new_v4(),
            wa_message_id: message.wa_message_id.clone(),
            wa_from: message.from.clone(),
            wa_to: message.to.clone(),
            profile_name: message.profile_name.clone(),
            message_type: message.message_type.clone(),
            message_text: message.text.clone(),
            raw: message.raw.clone(),
            created_at: message.received_at,
        };

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(whatsapp_messages::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(ArchiveError::persistence)?;
                Ok(())
            },
            ArchiveError::persistence,
            ArchiveError::persistence,
        )
        .await
    }

    async fn recent(&self, limit: usize) -> ArchiveResult<Vec<ArchivedMessage>> {
        let limit = i64::try_from(limit).map_err(ArchiveError::persistence)?;
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = whatsapp_messages::table
                    .order(whatsapp_messages::created_at.desc())
                    .limit(limit)
                    .select(MessageRow::as_select())
                    .load::<MessageRow>(connection)
                    .map_err(ArchiveError::persistence)?;
                Ok(rows.into_iter().map(row_to_message).collect())
            },
            ArchiveError::persistence,
            ArchiveError::persistence,
        )
        .await
    }
}

fn row_to_message(row: MessageRow) -> ArchivedMessage {
    ArchivedMessage {
        wa_message_id: row.wa_message_id,
        from: row.wa_from,
        to: row.wa_to,
        profile_name: row.profile_name,
        message_type: row.message_type,
        text: row.message_text,
        raw: row.raw,
        received_at: row.created_at,
    }
}
