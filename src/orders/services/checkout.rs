//! Checkout and staff status changes.

use crate::orders::{
    domain::{NewOrder, Order, OrderDomainError, OrderId, OrderNumber, OrderStatus},
    ports::{OrderRepository, OrderRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Order numbers tried before a collision is reported.
pub const ORDER_NUMBER_ATTEMPTS: usize = 3;

/// Service-level errors for checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] OrderDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] OrderRepositoryError),
}

/// Result type for checkout service operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Places orders and moves them through their status lifecycle.
pub struct CheckoutService<R, C>
where
    R: OrderRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CheckoutService<R, C>
where
    R: OrderRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new checkout service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Stores `order` as a pending order under a freshly generated number.
    ///
    /// A new number is drawn when the generated one is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Repository`] when the store rejects the order
    /// or every generated number collides.
    pub async fn place(&self, order: &NewOrder) -> CheckoutResult<Order> {
        let mut attempt = 1;
        loop {
            let number = OrderNumber::generate(self.clock.utc());
            match self.repository.place(&number, order).await {
                Err(OrderRepositoryError::DuplicateOrderNumber(taken))
                    if attempt < ORDER_NUMBER_ATTEMPTS =>
                {
                    debug!(order_number = %taken, attempt, "order number taken, drawing another");
                    attempt += 1;
                }
                Ok(placed) => {
                    info!(
                        order_number = %placed.order_number,
                        items = order.items().len(),
                        "order placed"
                    );
                    return Ok(placed);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Sets the status of the order with identifier `id`.
    ///
    /// Returns `Ok(None)` when no order has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Repository`] when the update fails.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> CheckoutResult<Option<Order>> {
        Ok(self.repository.update_status(id, status).await?)
    }
}
