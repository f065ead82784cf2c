//! Repository port for order persistence and lookup.

use crate::orders::domain::{
    NewOrder, Order, OrderDetail, OrderFilter, OrderId, OrderNumber, OrderStatus,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order repository operations.
pub type OrderRepositoryResult<T> = Result<T, OrderRepositoryError>;

/// Order persistence contract.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores an order and its line items atomically under `number`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRepositoryError::DuplicateOrderNumber`] when the number
    /// is already taken.
    async fn place(&self, number: &OrderNumber, order: &NewOrder) -> OrderRepositoryResult<Order>;

    /// Finds an order and its line items by order number.
    async fn find_by_number(&self, number: &OrderNumber)
    -> OrderRepositoryResult<Option<OrderDetail>>;

    /// Lists orders newest first, returning at most `limit` records.
    async fn list(&self, filter: &OrderFilter, limit: usize) -> OrderRepositoryResult<Vec<Order>>;

    /// Sets the status of the order with the given number.
    ///
    /// Returns `None` when no order has the number.
    async fn update_status_by_number(
        &self,
        number: &OrderNumber,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>>;

    /// Sets the status of the order with the given identifier.
    ///
    /// Returns `None` when no order has the identifier.
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>>;
}

/// Errors returned by order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderRepositoryError {
    /// Another order already uses the order number.
    #[error("duplicate order number: {0}")]
    DuplicateOrderNumber(OrderNumber),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
