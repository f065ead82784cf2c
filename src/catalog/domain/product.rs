//! Product records and the write models used to create and change them.

use super::{CatalogDomainError, CategoryId, Price, ProductId, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: Slug,
    /// Optional long description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Category the product is filed under, if any.
    pub category_id: Option<CategoryId>,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Whether the product is offered on the storefront.
    pub is_active: bool,
    /// Whether the product is highlighted on the storefront.
    pub is_featured: bool,
    /// Sort key for listings, ascending.
    pub display_order: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Reference to the category a new product is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRef {
    /// Category addressed by identifier.
    Id(CategoryId),
    /// Category addressed by slug; resolved by the store during insert.
    Slug(Slug),
}

/// Write model for inserting a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    slug: Slug,
    price: Price,
    description: Option<String>,
    category: Option<CategoryRef>,
    stock_quantity: u32,
    is_active: bool,
    is_featured: bool,
}

impl NewProduct {
    /// Creates an active, unfeatured product with no stock.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        slug: Slug,
        price: Price,
    ) -> Result<Self, CatalogDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(CatalogDomainError::EmptyName);
        }

        Ok(Self {
            name: trimmed.to_owned(),
            slug,
            price,
            description: None,
            category: None,
            stock_quantity: 0,
            is_active: true,
            is_featured: false,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Files the product under a category.
    #[must_use]
    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the initial stock quantity.
    #[must_use]
    pub const fn with_stock_quantity(mut self, quantity: u32) -> Self {
        self.stock_quantity = quantity;
        self
    }

    /// Sets whether the product is offered.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Sets whether the product is featured.
    #[must_use]
    pub const fn with_featured(mut self, featured: bool) -> Self {
        self.is_featured = featured;
        self
    }

    /// Replaces the slug, keeping every other field.
    #[must_use]
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slug.
    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the category reference.
    #[must_use]
    pub const fn category(&self) -> Option<&CategoryRef> {
        self.category.as_ref()
    }

    /// Returns the initial stock quantity.
    #[must_use]
    pub const fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// Returns whether the product is offered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns whether the product is featured.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// Partial update of a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    /// New display name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<Price>,
    /// New description.
    pub description: Option<String>,
    /// New availability flag.
    pub is_active: Option<bool>,
    /// New stock quantity.
    pub stock_quantity: Option<u32>,
}

impl ProductPatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
            && self.stock_quantity.is_none()
    }

    /// Applies the patch to a product and stamps the update time.
    pub fn apply_to(&self, product: &mut Product, updated_at: DateTime<Utc>) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(active) = self.is_active {
            product.is_active = active;
        }
        if let Some(quantity) = self.stock_quantity {
            product.stock_quantity = quantity;
        }
        product.updated_at = updated_at;
    }
}

/// Which products a listing includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilter {
    /// Only products offered on the storefront.
    #[default]
    Active,
    /// Every product, offered or not.
    All,
}

impl ProductFilter {
    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::All => "all",
        }
    }

    /// Returns `true` when `product` belongs in a listing with this filter.
    #[must_use]
    pub const fn admits(self, product: &Product) -> bool {
        match self {
            Self::Active => product.is_active,
            Self::All => true,
        }
    }
}

impl TryFrom<&str> for ProductFilter {
    type Error = CatalogDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "all" => Ok(Self::All),
            _ => Err(CatalogDomainError::UnknownFilter(value.to_owned())),
        }
    }
}
