//! Customer orders placed through the storefront checkout.
//!
//! Orders are created by the public checkout route and progressed through
//! their status lifecycle by staff, either from the back-office API or from
//! the `/order` admin command.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
