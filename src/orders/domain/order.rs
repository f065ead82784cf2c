//! Order records and the checkout write model.

use super::{OrderDomainError, OrderId, OrderItemId, OrderNumber, OrderStatus};
use crate::catalog::domain::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order header as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Internal identifier.
    pub id: OrderId,
    /// Human-facing order number.
    pub order_number: OrderNumber,
    /// Who placed the order.
    pub customer: CustomerDetails,
    /// Amount charged for the whole order.
    pub total_amount: Decimal,
    /// Fulfilment state.
    pub status: OrderStatus,
    /// Placement timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Contact and delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,
    /// Customer phone number.
    pub phone: String,
    /// Optional e-mail address.
    pub email: Option<String>,
    /// Delivery address.
    pub delivery_address: String,
    /// Free-text notes for the kitchen or courier.
    pub special_instructions: Option<String>,
}

impl CustomerDetails {
    fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.delivery_address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A line item as stored.
///
/// Product name, price and slug are copied at checkout so the order still
/// reads correctly after the catalogue changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line item identifier.
    pub id: OrderItemId,
    /// Catalogue product, when the line came from the catalogue.
    pub product_id: Option<ProductId>,
    /// Product name at checkout.
    pub product_name: String,
    /// Unit price at checkout.
    pub product_price: Decimal,
    /// Units ordered.
    pub quantity: u32,
    /// Line total.
    pub total_price: Decimal,
    /// Product image at checkout.
    pub product_image_url: Option<String>,
    /// Product slug at checkout.
    pub product_slug: Option<String>,
}

/// An order with its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Order header.
    pub order: Order,
    /// Line items in checkout order.
    pub items: Vec<OrderItem>,
}

/// A line item submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// Catalogue product, if known.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Product name.
    pub product_name: String,
    /// Unit price.
    pub product_price: Decimal,
    /// Units ordered.
    pub quantity: u32,
    /// Line total.
    pub total_price: Decimal,
    /// Product image.
    #[serde(default)]
    pub product_image_url: Option<String>,
    /// Product slug.
    #[serde(default)]
    pub product_slug: Option<String>,
}

/// Validated checkout submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    customer: CustomerDetails,
    items: Vec<NewOrderItem>,
    total_amount: Decimal,
}

impl NewOrder {
    /// Validates a checkout submission.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::MissingCustomerDetails`] when the name,
    /// phone or delivery address is blank, and [`OrderDomainError::NoItems`]
    /// when `items` is empty.
    pub fn new(
        customer: CustomerDetails,
        items: Vec<NewOrderItem>,
        total_amount: Decimal,
    ) -> Result<Self, OrderDomainError> {
        if !customer.is_complete() {
            return Err(OrderDomainError::MissingCustomerDetails);
        }
        if items.is_empty() {
            return Err(OrderDomainError::NoItems);
        }
        Ok(Self {
            customer,
            items,
            total_amount,
        })
    }

    /// Returns the customer details.
    #[must_use]
    pub const fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Returns the submitted line items.
    #[must_use]
    pub fn items(&self) -> &[NewOrderItem] {
        &self.items
    }

    /// Returns the order total.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}

/// Which orders a listing includes.
///
/// The status is kept as free text: filtering by a value that matches no
/// status simply yields an empty listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    status: Option<String>,
}

impl OrderFilter {
    /// Admits every order.
    #[must_use]
    pub const fn any() -> Self {
        Self { status: None }
    }

    /// Admits orders whose status text equals `status`.
    #[must_use]
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// Returns the status text being matched, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns `true` when `order` belongs in the listing.
    #[must_use]
    pub fn admits(&self, order: &Order) -> bool {
        self.status
            .as_deref()
            .is_none_or(|wanted| order.status.as_str() == wanted)
    }
}
