//! Error types for catalogue value validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned while constructing catalogue values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The price text is not a decimal number.
    #[error("invalid price '{0}', expected a number such as 12.50")]
    InvalidPrice(String),

    /// The price is below zero.
    #[error("price must be greater than or equal to 0, got {0}")]
    NegativePrice(Decimal),

    /// The slug has no letters or digits left after normalisation.
    #[error("slug must contain at least one letter or digit")]
    EmptySlug,

    /// The product name is empty after trimming.
    #[error("product name must not be empty")]
    EmptyName,

    /// The listing filter is not one of `active` or `all`.
    #[error("unknown product filter '{0}', expected active or all")]
    UnknownFilter(String),
}
