//! Order lifecycle states.

use super::OrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment state of an order.
///
/// Any state may be set from any other; staff correct mistakes by setting
/// the status again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed and awaiting confirmation.
    Pending,
    /// Accepted by the kitchen.
    Confirmed,
    /// Being prepared.
    Preparing,
    /// Ready for pick-up or dispatch.
    Ready,
    /// Handed to the customer.
    Delivered,
    /// Cancelled by staff or customer.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = OrderDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| OrderDomainError::UnknownStatus(value.to_owned()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
