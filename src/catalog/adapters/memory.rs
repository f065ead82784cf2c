//! In-memory product repository for tests and database-less runs.

use async_trait::async_trait;
use mockable::Clock;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{
        CategoryId, CategoryRef, NewProduct, Product, ProductFilter, ProductId, ProductPatch, Slug,
    },
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};

/// Thread-safe in-memory product repository.
#[derive(Debug)]
pub struct InMemoryProductRepository<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryCatalogState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: Vec<Product>,
    categories: HashMap<Slug, CategoryId>,
}

impl<C> InMemoryProductRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryCatalogState::default())),
            clock: Arc::new(clock),
        }
    }

    /// Registers a category so products can be filed under it.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn add_category(&self, slug: Slug) -> ProductRepositoryResult<CategoryId> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = *state.categories.entry(slug).or_default();
        Ok(id)
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> ProductRepositoryError {
    ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn resolve_category(
    state: &InMemoryCatalogState,
    category: Option<&CategoryRef>,
) -> ProductRepositoryResult<Option<CategoryId>> {
    match category {
        None => Ok(None),
        Some(CategoryRef::Id(id)) => {
            if state.categories.values().any(|known| known == id) {
                Ok(Some(*id))
            } else {
                Err(ProductRepositoryError::UnknownCategory(id.to_string()))
            }
        }
        Some(CategoryRef::Slug(slug)) => state
            .categories
            .get(slug)
            .copied()
            .map(Some)
            .ok_or_else(|| ProductRepositoryError::UnknownCategory(slug.to_string())),
    }
}

#[async_trait]
impl<C> ProductRepository for InMemoryProductRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, product: &NewProduct) -> ProductRepositoryResult<Product> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state
            .products
            .iter()
            .any(|existing| existing.slug == *product.slug())
        {
            return Err(ProductRepositoryError::DuplicateSlug(product.slug().clone()));
        }

        let category_id = resolve_category(&state, product.category())?;
        let timestamp = self.clock.utc();
        let stored = Product {
            id: ProductId::new(),
            name: product.name().to_owned(),
            slug: product.slug().clone(),
            description: product.description().map(str::to_owned),
            price: product.price(),
            category_id,
            stock_quantity: product.stock_quantity(),
            is_active: product.is_active(),
            is_featured: product.is_featured(),
            display_order: 0,
            created_at: timestamp,
            updated_at: timestamp,
        };
        state.products.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_slug(&self, slug: &Slug) -> ProductRepositoryResult<Option<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .products
            .iter()
            .find(|product| product.slug == *slug)
            .cloned())
    }

    async fn update_by_slug(
        &self,
        slug: &Slug,
        patch: &ProductPatch,
    ) -> ProductRepositoryResult<Option<Product>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let timestamp = self.clock.utc();
        let updated = state
            .products
            .iter_mut()
            .find(|product| product.slug == *slug)
            .map(|product| {
                patch.apply_to(product, timestamp);
                product.clone()
            });
        Ok(updated)
    }

    async fn list(
        &self,
        filter: ProductFilter,
        limit: usize,
    ) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|product| filter.admits(product))
            .cloned()
            .collect();
        products.sort_by_key(|product| (product.display_order, Reverse(product.created_at)));
        products.truncate(limit);
        Ok(products)
    }
}
