//! Repository port for product persistence and lookup.

use crate::catalog::domain::{NewProduct, Product, ProductFilter, ProductPatch, Slug};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for product repository operations.
pub type ProductRepositoryResult<T> = Result<T, ProductRepositoryError>;

/// Product persistence contract.
///
/// Every method is a single logical store operation.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new product and returns the stored record.
    ///
    /// A [`crate::catalog::domain::CategoryRef::Slug`] is resolved as part of
    /// the same operation.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::DuplicateSlug`] when the slug is
    /// taken or [`ProductRepositoryError::UnknownCategory`] when the category
    /// reference does not resolve.
    async fn insert(&self, product: &NewProduct) -> ProductRepositoryResult<Product>;

    /// Finds a product by slug.
    ///
    /// Returns `None` when no product has the slug.
    async fn find_by_slug(&self, slug: &Slug) -> ProductRepositoryResult<Option<Product>>;

    /// Applies a patch to the product with the given slug.
    ///
    /// Returns the updated record, or `None` when no product has the slug.
    async fn update_by_slug(
        &self,
        slug: &Slug,
        patch: &ProductPatch,
    ) -> ProductRepositoryResult<Option<Product>>;

    /// Lists products ordered by display order, newest first within a
    /// display order, returning at most `limit` records.
    async fn list(
        &self,
        filter: ProductFilter,
        limit: usize,
    ) -> ProductRepositoryResult<Vec<Product>>;
}

/// Errors returned by product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProductRepositoryError {
    /// Another product already uses the slug.
    #[error("duplicate product slug: {0}")]
    DuplicateSlug(Slug),

    /// The category reference does not match any category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProductRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
