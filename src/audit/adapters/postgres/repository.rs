//! `PostgreSQL` command log implementation.

use super::{models::CommandLogRow, schema::admin_command_logs};
use crate::audit::{
    domain::{CommandLogEntry, CommandLogId},
    ports::{CommandLogError, CommandLogRepository, CommandLogResult},
};
use crate::postgres::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed command log.
#[derive(Debug, Clone)]
pub struct PostgresCommandLog {
    pool: PgPool,
}

impl PostgresCommandLog {
    /// Creates a new command log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommandLogRepository for PostgresCommandLog {
    async fn append(&self, entry: &CommandLogEntry) -> CommandLogResult<()> {
        let row = CommandLogRow {
            id: entry.id.into_inner(),
            admin_phone: entry.actor.clone(),
            command: entry.command.clone(),
            args: serde_json::to_value(&entry.args).map_err(CommandLogError::persistence)?,
            success: entry.succeeded,
            response: entry.reply_text.clone(),
            error_message: entry.error_message.clone(),
            created_at: entry.created_at,
        };

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(admin_command_logs::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(CommandLogError::persistence)?;
                Ok(())
            },
            CommandLogError::persistence,
            CommandLogError::persistence,
        )
        .await
    }

    async fn recent(&self, limit: usize) -> CommandLogResult<Vec<CommandLogEntry>> {
        let limit = i64::try_from(limit).map_err(CommandLogError::persistence)?;
        run_blocking(
            &self.pool,
            move |connection| {
                admin_command_logs::table
                    .order(admin_command_logs::created_at.desc())
                    .limit(limit)
                    .select(CommandLogRow::as_select())
                    .load::<CommandLogRow>(connection)
                    .map_err(CommandLogError::persistence)?
                    .into_iter()
                    .map(row_to_entry)
                    .collect()
            },
            CommandLogError::persistence,
            CommandLogError::persistence,
        )
        .await
    }
}

fn row_to_entry(row: CommandLogRow) -> CommandLogResult<CommandLogEntry> {
    Ok(CommandLogEntry {
        id: CommandLogId::from_uuid(row.id),
        actor: row.admin_phone,
        command: row.command,
        args: serde_json::from_value(row.args).map_err(CommandLogError::persistence)?,
        succeeded: row.success,
        reply_text: row.response,
        error_message: row.error_message,
        created_at: row.created_at,
    })
}
