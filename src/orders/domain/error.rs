//! Error types for order validation.

use thiserror::Error;

/// Errors returned while constructing order values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The status is not one of the fixed order states.
    #[error("unknown order status '{0}'")]
    UnknownStatus(String),

    /// The order number is blank.
    #[error("order number must not be empty")]
    EmptyOrderNumber,

    /// A required customer field is blank.
    #[error("Missing required fields: customer_name, customer_phone, delivery_address")]
    MissingCustomerDetails,

    /// The order has no line items.
    #[error("Order must contain at least one item")]
    NoItems,
}
