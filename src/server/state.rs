//! Shared handler state.

use std::sync::Arc;

use mockable::Clock;

use crate::catalog::{ports::ProductRepository, services::ProductCreationService};
use crate::orders::{ports::OrderRepository, services::CheckoutService};
use crate::whatsapp::services::InboundService;

/// Checkout service over trait-object store and clock.
pub type Checkout = CheckoutService<dyn OrderRepository, dyn Clock>;

/// Product creation service over a trait-object store.
pub type ProductCreation = ProductCreationService<dyn ProductRepository>;

/// Everything the HTTP handlers need, built once at start-up.
pub struct AppState {
    /// Inbound WhatsApp message flow.
    pub inbound: InboundService,
    /// Order placement and status changes.
    pub checkout: Checkout,
    /// Product creation with slug retry.
    pub products: ProductCreation,
    /// Webhook handshake secret.
    pub verify_token: Option<String>,
    /// Bearer token for the admin routes.
    pub admin_token: Option<String>,
}

impl AppState {
    /// Bundles the services into shareable state.
    #[must_use]
    pub fn new(
        inbound: InboundService,
        checkout: Checkout,
        products: ProductCreation,
        verify_token: Option<String>,
        admin_token: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            inbound,
            checkout,
            products,
            verify_token,
            admin_token,
        })
    }
}
