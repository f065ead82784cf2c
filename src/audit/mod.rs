//! Audit trail of admin command attempts.
//!
//! Every `/` command received from an allow-listed phone is recorded once,
//! whatever its outcome. Entries are append-only: nothing here updates or
//! deletes them.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
