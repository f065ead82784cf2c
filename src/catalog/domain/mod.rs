//! Domain model for the product catalogue.
//!
//! Values here are validated on construction; the store adapters never see an
//! empty slug or a negative price.

mod error;
mod ids;
mod price;
mod product;
mod slug;

pub use error::CatalogDomainError;
pub use ids::{CategoryId, ProductId};
pub use price::Price;
pub use product::{CategoryRef, NewProduct, Product, ProductFilter, ProductPatch};
pub use slug::{Slug, slugify};
