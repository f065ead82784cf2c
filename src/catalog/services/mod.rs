//! Application services for the product catalogue.

mod creation;

pub use creation::{ProductCreationService, SLUG_SUFFIX_RETRIES};
