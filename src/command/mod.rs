//! Admin chat commands.
//!
//! Allow-listed staff manage the catalogue and orders by sending
//! `/command key=value` messages over WhatsApp. This context turns one line
//! of text into an [`domain::AdminCommand`], runs it against the stores and
//! renders the reply:
//!
//! - Parsing and validation in [`domain`]
//! - Dispatch, handlers and reply templates in [`services`]
//!
//! Values are split on single spaces with no quoting, so a value cannot
//! contain a space.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
