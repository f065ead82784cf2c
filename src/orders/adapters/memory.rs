//! In-memory order repository for tests and database-less runs.

use async_trait::async_trait;
use mockable::Clock;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use crate::orders::{
    domain::{
        NewOrder, Order, OrderDetail, OrderFilter, OrderId, OrderItem, OrderItemId, OrderNumber,
        OrderStatus,
    },
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};

/// Thread-safe in-memory order repository.
#[derive(Debug)]
pub struct InMemoryOrderRepository<C>
where
    C: Clock + Send + Sync,
{
    orders: Arc<RwLock<Vec<OrderDetail>>>,
    clock: Arc<C>,
}

impl<C> InMemoryOrderRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            clock: Arc::new(clock),
        }
    }

    fn set_status<P>(&self, status: OrderStatus, mut matches: P) -> OrderRepositoryResult<Option<Order>>
    where
        P: FnMut(&Order) -> bool,
    {
        let mut orders = self.orders.write().map_err(lock_error)?;
        let timestamp = self.clock.utc();
        Ok(orders
            .iter_mut()
            .find(|detail| matches(&detail.order))
            .map(|detail| {
                detail.order.status = status;
                detail.order.updated_at = timestamp;
                detail.order.clone()
            }))
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> OrderRepositoryError {
    OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> OrderRepository for InMemoryOrderRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn place(&self, number: &OrderNumber, order: &NewOrder) -> OrderRepositoryResult<Order> {
        let mut orders = self.orders.write().map_err(lock_error)?;
        if orders
            .iter()
            .any(|existing| existing.order.order_number == *number)
        {
            return Err(OrderRepositoryError::DuplicateOrderNumber(number.clone()));
        }

        let timestamp = self.clock.utc();
        let header = Order {
            id: OrderId::new(),
            order_number: number.clone(),
            customer: order.customer().clone(),
            total_amount: order.total_amount(),
            status: OrderStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        };
        let items = order
            .items()
            .iter()
            .map(|item| OrderItem {
                id: OrderItemId::new(),
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                product_price: item.product_price,
                quantity: item.quantity,
                total_price: item.total_price,
                product_image_url: item.product_image_url.clone(),
                product_slug: item.product_slug.clone(),
            })
            .collect();
        orders.push(OrderDetail {
            order: header.clone(),
            items,
        });
        Ok(header)
    }

    async fn find_by_number(
        &self,
        number: &OrderNumber,
    ) -> OrderRepositoryResult<Option<OrderDetail>> {
        let orders = self.orders.read().map_err(lock_error)?;
        Ok(orders
            .iter()
            .find(|detail| detail.order.order_number == *number)
            .cloned())
    }

    async fn list(&self, filter: &OrderFilter, limit: usize) -> OrderRepositoryResult<Vec<Order>> {
        let orders = self.orders.read().map_err(lock_error)?;
        let mut listed: Vec<Order> = orders
            .iter()
            .map(|detail| &detail.order)
            .filter(|order| filter.admits(order))
            .cloned()
            .collect();
        listed.sort_by_key(|order| Reverse(order.created_at));
        listed.truncate(limit);
        Ok(listed)
    }

    async fn update_status_by_number(
        &self,
        number: &OrderNumber,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>> {
        self.set_status(status, |order| order.order_number == *number)
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>> {
        self.set_status(status, |order| order.id == id)
    }
}
