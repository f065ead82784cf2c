//! Diesel row models for the inbound message archive.

use super::schema::whatsapp_messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row in `whatsapp_messages`, used for both insert and select.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = whatsapp_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    pub id: uuid::Uuid,
    pub wa_message_id: String,
    pub wa_from: String,
    pub wa_to: Option<String>,
    pub profile_name: Option<String>,
    pub message_type: String,
    pub message_text: Option<String>,
    pub raw: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
