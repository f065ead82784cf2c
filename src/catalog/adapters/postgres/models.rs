//! Diesel row models for catalogue persistence.

use super::schema::products;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<uuid::Uuid>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert model for product records; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<uuid::Uuid>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

/// Partial update of a product row; `None` columns are skipped.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub stock_quantity: Option<i32>,
}
