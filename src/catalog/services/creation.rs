//! Product creation with slug-collision recovery.

use crate::catalog::{
    domain::{NewProduct, Product, Slug},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::sync::Arc;
use tracing::debug;

/// Number of suffixed retries attempted after the first slug collides.
pub const SLUG_SUFFIX_RETRIES: usize = 3;

const SUFFIX_LENGTH: usize = 4;

/// Creates products, re-slugging on collision.
///
/// This is the path used by the product API. The `/add` admin command
/// inserts directly and reports a collision as a store error instead.
pub struct ProductCreationService<R>
where
    R: ProductRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> ProductCreationService<R>
where
    R: ProductRepository + ?Sized,
{
    /// Creates a new product creation service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Inserts `draft`, appending a random `-xxxx` suffix to its slug when the
    /// slug is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::DuplicateSlug`] when every suffixed
    /// slug also collides, or any other repository error unchanged.
    pub async fn create(&self, draft: NewProduct) -> ProductRepositoryResult<Product> {
        let base_slug = draft.slug().clone();
        let mut candidate = draft;

        for _ in 0..SLUG_SUFFIX_RETRIES {
            match self.repository.insert(&candidate).await {
                Err(ProductRepositoryError::DuplicateSlug(taken)) => {
                    debug!(slug = %taken, "product slug taken, retrying with suffix");
                    candidate = candidate.with_slug(suffixed(&base_slug));
                }
                outcome => return outcome,
            }
        }

        self.repository.insert(&candidate).await
    }
}

fn suffixed(slug: &Slug) -> Slug {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    slug.with_suffix(&suffix)
}
