//! Diesel row models for order persistence.

use super::schema::{order_items, orders};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for order headers.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: uuid::Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub special_instructions: Option<String>,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert model for order headers.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: uuid::Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub special_instructions: Option<String>,
    pub total_amount: Decimal,
    pub status: String,
}

/// Query result row for line items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: uuid::Uuid,
    pub product_id: Option<uuid::Uuid>,
    pub product_name: String,
    pub product_price: Decimal,
    pub quantity: i32,
    pub total_price: Decimal,
    pub product_image_url: Option<String>,
    pub product_slug: Option<String>,
}

/// Insert model for line items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: uuid::Uuid,
    pub order_id: uuid::Uuid,
    pub product_id: Option<uuid::Uuid>,
    pub product_name: String,
    pub product_price: Decimal,
    pub quantity: i32,
    pub total_price: Decimal,
    pub product_image_url: Option<String>,
    pub product_slug: Option<String>,
}
