//! Product creation route.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

use super::require_admin;
use crate::catalog::{
    domain::{CategoryId, CategoryRef, NewProduct, Price, Slug},
    ports::ProductRepositoryError,
};
use crate::server::{error::ApiError, state::AppState};

/// Product form as posted by the back office.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category_id: Option<CategoryId>,
    #[serde(default)]
    stock_quantity: Option<u32>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    is_featured: Option<bool>,
}

impl CreateProductRequest {
    fn into_draft(self) -> Result<NewProduct, ApiError> {
        let (Some(name), Some(price)) = (
            self.name.filter(|name| !name.trim().is_empty()),
            self.price,
        ) else {
            return Err(ApiError::bad_request("Name and price are required"));
        };
        let price = Price::new(price)
            .map_err(|_| ApiError::bad_request("Price must be greater than or equal to 0"))?;
        let slug = match self.slug.filter(|slug| !slug.trim().is_empty()) {
            Some(explicit) => Slug::new(explicit),
            None => Slug::from_name(&name),
        }
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

        let mut draft = NewProduct::new(name, slug, price)
            .map_err(|err| ApiError::bad_request(err.to_string()))?
            .with_stock_quantity(self.stock_quantity.unwrap_or_default())
            .with_active(self.is_active.unwrap_or(true))
            .with_featured(self.is_featured.unwrap_or_default());
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(category) = self.category_id {
            draft = draft.with_category(CategoryRef::Id(category));
        }
        Ok(draft)
    }
}

/// Creates a product, re-slugging on collision. Requires the admin token.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_admin(&state, &headers)?;
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let draft = request.into_draft()?;

    match state.products.create(draft).await {
        Ok(product) => {
            info!(slug = %product.slug, "product created");
            Ok((StatusCode::CREATED, Json(json!({ "data": product }))))
        }
        Err(ProductRepositoryError::DuplicateSlug(slug)) => Err(ApiError::Conflict(format!(
            "A product with slug '{slug}' already exists"
        ))),
        Err(ProductRepositoryError::UnknownCategory(category)) => Err(ApiError::bad_request(
            format!("Unknown category '{category}'"),
        )),
        Err(err) => {
            error!(error = %err, "failed to create product");
            Err(ApiError::internal("Failed to create product"))
        }
    }
}
