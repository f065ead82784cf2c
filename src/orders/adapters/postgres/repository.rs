//! `PostgreSQL` repository implementation for orders.

use super::{
    models::{NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow},
    schema::{order_items, orders},
};
use crate::catalog::domain::ProductId;
use crate::orders::{
    domain::{
        CustomerDetails, NewOrder, Order, OrderDetail, OrderFilter, OrderId, OrderItem,
        OrderItemId, OrderNumber, OrderStatus,
    },
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};
use crate::postgres::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed order repository.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run<F, T>(&self, f: F) -> OrderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OrderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(
            &self.pool,
            f,
            OrderRepositoryError::persistence,
            OrderRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn place(&self, number: &OrderNumber, order: &NewOrder) -> OrderRepositoryResult<Order> {
        let order_id = OrderId::new().into_inner();
        let header = to_order_row(order_id, number, order);
        let items = order
            .items()
            .iter()
            .map(|item| {
                Ok(NewOrderItemRow {
                    id: OrderItemId::new().into_inner(),
                    order_id,
                    product_id: item.product_id.map(ProductId::into_inner),
                    product_name: item.product_name.clone(),
                    product_price: item.product_price,
                    quantity: i32::try_from(item.quantity)
                        .map_err(OrderRepositoryError::persistence)?,
                    total_price: item.total_price,
                    product_image_url: item.product_image_url.clone(),
                    product_slug: item.product_slug.clone(),
                })
            })
            .collect::<OrderRepositoryResult<Vec<_>>>()?;
        let duplicate = number.clone();

        self.run(move |connection| {
            let row = connection
                .transaction::<_, DieselError, _>(|tx| {
                    let row = diesel::insert_into(orders::table)
                        .values(&header)
                        .returning(OrderRow::as_returning())
                        .get_result::<OrderRow>(tx)?;
                    diesel::insert_into(order_items::table)
                        .values(&items)
                        .execute(tx)?;
                    Ok(row)
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        OrderRepositoryError::DuplicateOrderNumber(duplicate)
                    }
                    _ => OrderRepositoryError::persistence(err),
                })?;
            row_to_order(row)
        })
        .await
    }

    async fn find_by_number(
        &self,
        number: &OrderNumber,
    ) -> OrderRepositoryResult<Option<OrderDetail>> {
        let lookup = number.as_str().to_owned();
        self.run(move |connection| {
            let Some(row) = orders::table
                .filter(orders::order_number.eq(&lookup))
                .select(OrderRow::as_select())
                .first::<OrderRow>(connection)
                .optional()
                .map_err(OrderRepositoryError::persistence)?
            else {
                return Ok(None);
            };

            let items = order_items::table
                .filter(order_items::order_id.eq(row.id))
                .order(order_items::created_at.asc())
                .select(OrderItemRow::as_select())
                .load::<OrderItemRow>(connection)
                .map_err(OrderRepositoryError::persistence)?
                .into_iter()
                .map(row_to_item)
                .collect::<OrderRepositoryResult<Vec<_>>>()?;

            Ok(Some(OrderDetail {
                order: row_to_order(row)?,
                items,
            }))
        })
        .await
    }

    async fn list(&self, filter: &OrderFilter, limit: usize) -> OrderRepositoryResult<Vec<Order>> {
        let limit = i64::try_from(limit).map_err(OrderRepositoryError::persistence)?;
        let status = filter.status().map(str::to_owned);
        self.run(move |connection| {
            let mut query = orders::table
                .select(OrderRow::as_select())
                .order(orders::created_at.desc())
                .limit(limit)
                .into_boxed();
            if let Some(wanted) = status {
                query = query.filter(orders::status.eq(wanted));
            }

            query
                .load::<OrderRow>(connection)
                .map_err(OrderRepositoryError::persistence)?
                .into_iter()
                .map(row_to_order)
                .collect()
        })
        .await
    }

    async fn update_status_by_number(
        &self,
        number: &OrderNumber,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>> {
        let lookup = number.as_str().to_owned();
        self.run(move |connection| {
            diesel::update(orders::table.filter(orders::order_number.eq(&lookup)))
                .set((
                    orders::status.eq(status.as_str()),
                    orders::updated_at.eq(diesel::dsl::now),
                ))
                .returning(OrderRow::as_returning())
                .get_result::<OrderRow>(connection)
                .optional()
                .map_err(OrderRepositoryError::persistence)?
                .map(row_to_order)
                .transpose()
        })
        .await
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> OrderRepositoryResult<Option<Order>> {
        self.run(move |connection| {
            diesel::update(orders::table.find(id.into_inner()))
                .set((
                    orders::status.eq(status.as_str()),
                    orders::updated_at.eq(diesel::dsl::now),
                ))
                .returning(OrderRow::as_returning())
                .get_result::<OrderRow>(connection)
                .optional()
                .map_err(OrderRepositoryError::persistence)?
                .map(row_to_order)
                .transpose()
        })
        .await
    }
}

fn to_order_row(id: uuid::Uuid, number: &OrderNumber, order: &NewOrder) -> NewOrderRow {
    let customer = order.customer();
    NewOrderRow {
        id,
        order_number: number.as_str().to_owned(),
        customer_name: customer.name.clone(),
        customer_phone: customer.phone.clone(),
        customer_email: customer.email.clone(),
        delivery_address: customer.delivery_address.clone(),
        special_instructions: customer.special_instructions.clone(),
        total_amount: order.total_amount(),
        status: OrderStatus::Pending.as_str().to_owned(),
    }
}

fn row_to_order(row: OrderRow) -> OrderRepositoryResult<Order> {
    let OrderRow {
        id,
        order_number,
        customer_name,
        customer_phone,
        customer_email,
        delivery_address,
        special_instructions,
        total_amount,
        status,
        created_at,
        updated_at,
    } = row;

    Ok(Order {
        id: OrderId::from_uuid(id),
        order_number: OrderNumber::new(order_number).map_err(OrderRepositoryError::persistence)?,
        customer: CustomerDetails {
            name: customer_name,
            phone: customer_phone,
            email: customer_email,
            delivery_address,
            special_instructions,
        },
        total_amount,
        status: OrderStatus::try_from(status.as_str())
            .map_err(OrderRepositoryError::persistence)?,
        created_at,
        updated_at,
    })
}

fn row_to_item(row: OrderItemRow) -> OrderRepositoryResult<OrderItem> {
    Ok(OrderItem {
        id: OrderItemId::from_uuid(row.id),
        product_id: row.product_id.map(ProductId::from_uuid),
        product_name: row.product_name,
        product_price: row.product_price,
        quantity: u32::try_from(row.quantity).map_err(OrderRepositoryError::persistence)?,
        total_price: row.total_price,
        product_image_url: row.product_image_url,
        product_slug: row.product_slug,
    })
}
