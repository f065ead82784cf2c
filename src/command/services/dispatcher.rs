//! Runs admin commands against the catalogue and order stores.

use minijinja::context;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

use super::render::{
    AVAILABILITY, ORDER_DETAIL, ORDER_LIST, ORDER_STATUS, PRODUCT_ADDED, PRODUCT_LIST,
    PRODUCT_UPDATED, help_text, render,
};
use super::render_committed;
use crate::catalog::{
    domain::{NewProduct, ProductFilter, ProductPatch, Slug},
    ports::{ProductRepository, ProductRepositoryError},
};
use crate::command::domain::{
    AdminCommand, CommandError, CommandInvocation, CommandKind, CommandReply, ORDER_PAGE_SIZE,
    PRODUCT_PAGE_SIZE,
};
use crate::orders::{
    domain::{OrderFilter, OrderNumber, OrderStatus},
    ports::OrderRepository,
};

/// Maps parsed commands to their handlers.
///
/// Every handler performs a single store operation. Failures never escape
/// [`CommandDispatcher::dispatch`]; they come back as a failed
/// [`CommandReply`].
pub struct CommandDispatcher<P, O>
where
    P: ProductRepository + ?Sized,
    O: OrderRepository + ?Sized,
{
    products: Arc<P>,
    orders: Arc<O>,
}

impl<P, O> CommandDispatcher<P, O>
where
    P: ProductRepository + ?Sized,
    O: OrderRepository + ?Sized,
{
    /// Creates a dispatcher over the given stores.
    #[must_use]
    pub const fn new(products: Arc<P>, orders: Arc<O>) -> Self {
        Self { products, orders }
    }

    /// Validates and runs `invocation` on behalf of `actor`.
    pub async fn dispatch(&self, invocation: &CommandInvocation, actor: &str) -> CommandReply {
        let span = info_span!("admin_command", actor = %actor, command = %invocation.name());
        async move {
            let outcome = match AdminCommand::try_from(invocation) {
                Ok(command) => self.run(command).await,
                Err(err) => Err(err),
            };
            match &outcome {
                Ok(_) => info!("command completed"),
                Err(err) => match err.audit_detail() {
                    Some(detail) => warn!(error = %detail, "command failed"),
                    None => debug!(reply = %err, "command rejected"),
                },
            }
            CommandReply::from(outcome)
        }
        .instrument(span)
        .await
    }

    /// Runs a validated command and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for lookups that miss and for store or
    /// template failures.
    pub async fn run(&self, command: AdminCommand) -> Result<String, CommandError> {
        match command {
            AdminCommand::Help => help_text(),
            AdminCommand::ListProducts { filter } => self.list_products(filter).await,
            AdminCommand::AddProduct(product) => self.add_product(&product).await,
            AdminCommand::UpdateProduct { slug, patch } => {
                self.update_product(&slug, &patch, CommandKind::Update, PRODUCT_UPDATED)
                    .await
            }
            AdminCommand::SetAvailability { slug, active } => {
                let patch = ProductPatch {
                    is_active: Some(active),
                    ..ProductPatch::default()
                };
                self.update_product(&slug, &patch, CommandKind::Stock, AVAILABILITY)
                    .await
            }
            AdminCommand::ListOrders { filter } => self.list_orders(&filter).await,
            AdminCommand::ShowOrder { number } => self.show_order(&number).await,
            AdminCommand::SetOrderStatus { number, status } => {
                self.set_order_status(&number, status).await
            }
        }
    }

    async fn list_products(&self, filter: ProductFilter) -> Result<String, CommandError> {
        let kind = CommandKind::List;
        let products = self
            .products
            .list(filter, PRODUCT_PAGE_SIZE)
            .await
            .map_err(|err| CommandError::fault(kind, err))?;
        render(
            kind,
            PRODUCT_LIST,
            context! { products, filter => filter.as_str() },
        )
    }

    async fn add_product(&self, product: &NewProduct) -> Result<String, CommandError> {
        let kind = CommandKind::Add;
        let stored = self.products.insert(product).await.map_err(|err| match err {
            ProductRepositoryError::UnknownCategory(category) => {
                CommandError::CategoryNotFound(category)
            }
            other => CommandError::fault(kind, other),
        })?;
        let fallback = || format!("✅ Product {} added", stored.slug);
        Ok(render_committed(
            kind,
            PRODUCT_ADDED,
            context! { product => &stored },
            fallback,
        ))
    }

    async fn update_product(
        &self,
        slug: &Slug,
        patch: &ProductPatch,
        kind: CommandKind,
        template: &str,
    ) -> Result<String, CommandError> {
        let updated = self
            .products
            .update_by_slug(slug, patch)
            .await
            .map_err(|err| CommandError::fault(kind, err))?
            .ok_or_else(|| CommandError::ProductNotFound(slug.to_string()))?;
        let fallback = || format!("✅ Product {} updated", updated.slug);
        Ok(render_committed(
            kind,
            template,
            context! { product => &updated },
            fallback,
        ))
    }

    async fn list_orders(&self, filter: &OrderFilter) -> Result<String, CommandError> {
        let kind = CommandKind::Orders;
        let orders = self
            .orders
            .list(filter, ORDER_PAGE_SIZE)
            .await
            .map_err(|err| CommandError::fault(kind, err))?;
        render(
            kind,
            ORDER_LIST,
            context! { orders, status => filter.status() },
        )
    }

    async fn show_order(&self, number: &OrderNumber) -> Result<String, CommandError> {
        let kind = CommandKind::Order;
        let detail = self
            .orders
            .find_by_number(number)
            .await
            .map_err(|err| CommandError::fault(kind, err))?
            .ok_or_else(|| CommandError::OrderNotFound(number.to_string()))?;
        render(
            kind,
            ORDER_DETAIL,
            context! { order => detail.order, items => detail.items },
        )
    }

    async fn set_order_status(
        &self,
        number: &OrderNumber,
        status: OrderStatus,
    ) -> Result<String, CommandError> {
        let kind = CommandKind::Order;
        let order = self
            .orders
            .update_status_by_number(number, status)
            .await
            .map_err(|err| CommandError::fault(kind, err))?
            .ok_or_else(|| CommandError::OrderNotFound(number.to_string()))?;
        let fallback = || format!("✅ Order {} is now {}", order.order_number, order.status);
        Ok(render_committed(
            kind,
            ORDER_STATUS,
            context! { order => &order },
            fallback,
        ))
    }
}
