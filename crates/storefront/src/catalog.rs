//! Static product catalog and the browsing queries the storefront views run
//! over it.
//!
//! The catalog is read once from a JSON array of products. Unlike the stores'
//! durable records it is configuration, so a missing or malformed catalog is
//! an error rather than an empty list.

use std::cmp::Ordering;
use std::path::Path;
use std::str::FromStr;

use luxe_core::{Price, Product, ProductId};
use thiserror::Error;
use tracing::instrument;

/// Pseudo-category matching every product.
pub const ALL_CATEGORIES: &str = "All";

/// Number of related products shown on a product page.
pub const RELATED_LIMIT: usize = 4;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordering applied to shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Highest rated first; unrated products sort as zero.
    Rating,
}

impl SortBy {
    /// Form value used in shop URLs and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::Rating => b
                .rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0)),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" | "default" => Ok(Self::Featured),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Shop page filter state.
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    /// Category to show; `None` or [`ALL_CATEGORIES`] shows everything.
    pub category: Option<String>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
    pub sort: SortBy,
}

impl ShopFilter {
    fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| c == ALL_CATEGORIES || c == product.category);
        let price_ok = self.max_price.is_none_or(|max| product.price <= max);
        category_ok && price_ok
    }
}

/// The product list the storefront browses.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text is not an array of products.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// `"All"` followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Products passing `filter`, in the filter's sort order.
    ///
    /// Sorting is stable, so ties keep catalog order.
    #[must_use]
    pub fn browse(&self, filter: &ShopFilter) -> Vec<&Product> {
        let mut listing: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();
        listing.sort_by(|a, b| filter.sort.compare(a, b));
        listing
    }

    /// Case-insensitive substring search over name, category and description.
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
                    || p
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Up to `limit` other products from the same category, in catalog order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}
