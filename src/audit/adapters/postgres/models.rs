//! Diesel row models for the command audit trail.

use super::schema::admin_command_logs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row in `admin_command_logs`, used for both insert and select.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = admin_command_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommandLogRow {
    pub id: uuid::Uuid,
    pub admin_phone: String,
    pub command: String,
    pub args: serde_json::Value,
    pub success: bool,
    pub response: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}
