//! Orchestration services for orders.

mod checkout;

pub use checkout::{CheckoutError, CheckoutResult, CheckoutService, ORDER_NUMBER_ATTEMPTS};
