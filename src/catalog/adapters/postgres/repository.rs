//! `PostgreSQL` repository implementation for the product catalogue.

use super::{
    models::{NewProductRow, ProductChangeset, ProductRow},
    schema::{categories, products},
};
use crate::catalog::{
    domain::{
        CategoryId, CategoryRef, NewProduct, Price, Product, ProductFilter, ProductId,
        ProductPatch, Slug,
    },
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use crate::postgres::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run<F, T>(&self, f: F) -> ProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(
            &self.pool,
            f,
            ProductRepositoryError::persistence,
            ProductRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: &NewProduct) -> ProductRepositoryResult<Product> {
        let product = product.clone();
        self.run(move |connection| {
            let category_id = resolve_category(connection, product.category())?;
            let new_row = NewProductRow {
                id: ProductId::new().into_inner(),
                name: product.name().to_owned(),
                slug: product.slug().as_str().to_owned(),
                description: product.description().map(str::to_owned),
                price: product.price().value(),
                category_id,
                stock_quantity: i32::try_from(product.stock_quantity())
                    .map_err(ProductRepositoryError::persistence)?,
                is_active: product.is_active(),
                is_featured: product.is_featured(),
            };

            let row = diesel::insert_into(products::table)
                .values(&new_row)
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProductRepositoryError::DuplicateSlug(product.slug().clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        ProductRepositoryError::UnknownCategory(
                            category_id.map(|id| id.to_string()).unwrap_or_default(),
                        )
                    }
                    _ => ProductRepositoryError::persistence(err),
                })?;
            row_to_product(row)
        })
        .await
    }

    async fn find_by_slug(&self, slug: &Slug) -> ProductRepositoryResult<Option<Product>> {
        let lookup = slug.as_str().to_owned();
        self.run(move |connection| {
            let row = products::table
                .filter(products::slug.eq(&lookup))
                .select(ProductRow::as_select())
                .first::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn update_by_slug(
        &self,
        slug: &Slug,
        patch: &ProductPatch,
    ) -> ProductRepositoryResult<Option<Product>> {
        let lookup = slug.as_str().to_owned();
        let changeset = to_changeset(patch)?;
        self.run(move |connection| {
            let row = diesel::update(products::table.filter(products::slug.eq(&lookup)))
                .set((&changeset, products::updated_at.eq(diesel::dsl::now)))
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn list(
        &self,
        filter: ProductFilter,
        limit: usize,
    ) -> ProductRepositoryResult<Vec<Product>> {
        let limit = i64::try_from(limit).map_err(ProductRepositoryError::persistence)?;
        self.run(move |connection| {
            let mut query = products::table
                .select(ProductRow::as_select())
                .order((products::display_order.asc(), products::created_at.desc()))
                .limit(limit)
                .into_boxed();
            if filter == ProductFilter::Active {
                query = query.filter(products::is_active.eq(true));
            }

            query
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?
                .into_iter()
                .map(row_to_product)
                .collect()
        })
        .await
    }
}

fn resolve_category(
    connection: &mut PgConnection,
    category: Option<&CategoryRef>,
) -> ProductRepositoryResult<Option<uuid::Uuid>> {
    match category {
        None => Ok(None),
        Some(CategoryRef::Id(id)) => Ok(Some(id.into_inner())),
        Some(CategoryRef::Slug(slug)) => categories::table
            .filter(categories::slug.eq(slug.as_str()))
            .select(categories::id)
            .first::<uuid::Uuid>(connection)
            .optional()
            .map_err(ProductRepositoryError::persistence)?
            .map(Some)
            .ok_or_else(|| ProductRepositoryError::UnknownCategory(slug.to_string())),
    }
}

fn to_changeset(patch: &ProductPatch) -> ProductRepositoryResult<ProductChangeset> {
    let stock_quantity = patch
        .stock_quantity
        .map(i32::try_from)
        .transpose()
        .map_err(ProductRepositoryError::persistence)?;

    Ok(ProductChangeset {
        name: patch.name.clone(),
        price: patch.price.map(Price::value),
        description: patch.description.clone(),
        is_active: patch.is_active,
        stock_quantity,
    })
}

fn row_to_product(row: ProductRow) -> ProductRepositoryResult<Product> {
    let ProductRow {
        id,
        name,
        slug,
        description,
        price,
        category_id,
        stock_quantity,
        is_active,
        is_featured,
        display_order,
        created_at,
        updated_at,
    } = row;

    Ok(Product {
        id: ProductId::from_uuid(id),
        name,
        slug: Slug::new(slug).map_err(ProductRepositoryError::persistence)?,
        description,
        price: Price::new(price).map_err(ProductRepositoryError::persistence)?,
        category_id: category_id.map(CategoryId::from_uuid),
        stock_quantity: u32::try_from(stock_quantity)
            .map_err(ProductRepositoryError::persistence)?,
        is_active,
        is_featured,
        display_order,
        created_at,
        updated_at,
    })
}
