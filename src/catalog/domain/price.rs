//! Non-negative monetary amount.

use super::CatalogDomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative price, stored without trailing zeros.
///
/// # Examples
///
/// ```
/// use maitre::catalog::domain::Price;
///
/// let price = Price::parse("12.50").expect("valid price");
/// assert_eq!(price.to_string(), "12.5");
/// assert!(Price::parse("-5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::NegativePrice`] when `value` is below
    /// zero.
    pub fn new(value: Decimal) -> Result<Self, CatalogDomainError> {
        if value < Decimal::ZERO {
            return Err(CatalogDomainError::NegativePrice(value));
        }
        Ok(Self(value.normalize()))
    }

    /// Parses a price from user text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::InvalidPrice`] for non-numeric input and
    /// [`CatalogDomainError::NegativePrice`] for negative amounts.
    pub fn parse(raw: &str) -> Result<Self, CatalogDomainError> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| CatalogDomainError::InvalidPrice(raw.to_owned()))?;
        Self::new(value)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CatalogDomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
