//! Assembles stores, services and handler state from configuration.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::audit::{
    adapters::{memory::InMemoryCommandLog, postgres::PostgresCommandLog},
    ports::CommandLogRepository,
    services::AuditLogger,
};
use crate::catalog::{
    adapters::{memory::InMemoryProductRepository, postgres::PostgresProductRepository},
    ports::ProductRepository,
    services::ProductCreationService,
};
use crate::command::services::CommandDispatcher;
use crate::config::AppConfig;
use crate::orders::{
    adapters::{memory::InMemoryOrderRepository, postgres::PostgresOrderRepository},
    ports::OrderRepository,
    services::CheckoutService,
};
use crate::postgres::PgPool;
use crate::server::AppState;
use crate::whatsapp::{
    adapters::{memory::InMemoryMessageArchive, postgres::PostgresMessageArchive},
    ports::{MessageArchive, Notifier},
    services::InboundService,
};

/// The four stores behind the services.
#[derive(Clone)]
pub struct Stores {
    /// Product catalogue.
    pub products: Arc<dyn ProductRepository>,
    /// Orders and line items.
    pub orders: Arc<dyn OrderRepository>,
    /// Admin command audit trail.
    pub command_log: Arc<dyn CommandLogRepository>,
    /// Inbound message archive.
    pub archive: Arc<dyn MessageArchive>,
}

impl Stores {
    /// Process-local stores; contents are lost on exit.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryProductRepository::new(DefaultClock)),
            orders: Arc::new(InMemoryOrderRepository::new(DefaultClock)),
            command_log: Arc::new(InMemoryCommandLog::new()),
            archive: Arc::new(InMemoryMessageArchive::new()),
        }
    }

    /// `PostgreSQL` stores sharing one pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            products: Arc::new(PostgresProductRepository::new(pool.clone())),
            orders: Arc::new(PostgresOrderRepository::new(pool.clone())),
            command_log: Arc::new(PostgresCommandLog::new(pool.clone())),
            archive: Arc::new(PostgresMessageArchive::new(pool.clone())),
        }
    }
}

/// Builds handler state over `stores`, replying through `notifier`.
#[must_use]
pub fn build_state(config: &AppConfig, stores: Stores, notifier: Arc<dyn Notifier>) -> Arc<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let Stores {
        products,
        orders,
        command_log,
        archive,
    } = stores;

    let inbound = InboundService::new(
        config.admins.clone(),
        CommandDispatcher::new(Arc::clone(&products), Arc::clone(&orders)),
        notifier,
        AuditLogger::new(command_log),
        archive,
        Arc::clone(&clock),
    );

    AppState::new(
        inbound,
        CheckoutService::new(orders, clock),
        ProductCreationService::new(products),
        config.verify_token.clone(),
        config.admin_api_token.clone(),
    )
}
