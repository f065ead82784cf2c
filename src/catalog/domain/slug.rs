//! URL slugs for products and categories.

use super::CatalogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derives a slug from free text.
///
/// ASCII letters and digits are kept (lower-cased); every run of other
/// characters becomes a single hyphen, and hyphens are never leading or
/// trailing.
///
/// ```
/// use maitre::catalog::domain::slugify;
///
/// assert_eq!(slugify("  Chicken & Leek Pie!! "), "chicken-leek-pie");
/// assert_eq!(slugify("***"), "");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for character in input.chars() {
        if character.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(character.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// A lower-case, whitespace-free slug identifying a product or category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Wraps an existing slug, lower-casing it.
    ///
    /// Lookups accept any stored slug, so only emptiness and embedded
    /// whitespace are rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptySlug`] when the value is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(CatalogDomainError::EmptySlug);
        }
        Ok(Self(normalized))
    }

    /// Derives a slug from a display name with [`slugify`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptySlug`] when the name has no ASCII
    /// letters or digits.
    pub fn from_name(name: &str) -> Result<Self, CatalogDomainError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(CatalogDomainError::EmptySlug);
        }
        Ok(Self(slug))
    }

    /// Returns this slug with `-<suffix>` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }

    /// Returns the slug as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = CatalogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
