//! Catalog browsing commands: shop listing, search and product pages.

use luxe_core::{Price, ProductId};
use luxe_storefront::catalog::{ALL_CATEGORIES, RELATED_LIMIT};
use luxe_storefront::error::{Result, StorefrontError};
use luxe_storefront::{ShopFilter, SortBy};

use super::{Context, emit};
use crate::view;

/// List products filtered by category and price, in the requested order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn shop(
    ctx: &Context,
    category: Option<String>,
    max_price: Option<u32>,
    sort: SortBy,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let title = match category.as_deref() {
        None | Some(ALL_CATEGORIES) => "All Products".to_string(),
        Some(c) => c.to_string(),
    };

    let filter = ShopFilter {
        category,
        max_price: max_price.map(Price::from),
        sort,
    };
    let listing = catalog.browse(&filter);

    emit(&format!("Categories: {}", catalog.categories().join(", ")));
    emit(&view::listing(&title, &listing));
    Ok(())
}

/// Search names, categories and descriptions.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn search(ctx: &Context, query: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let results = catalog.search(query);
    emit(&view::listing(&format!("Results for \"{}\"", query.trim()), &results));
    Ok(())
}

/// Show a product page.
///
/// # Errors
///
/// Returns `StorefrontError::ProductNotFound` if the ID is not in the catalog.
pub fn product(ctx: &Context, id: ProductId) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.find(id).ok_or(StorefrontError::ProductNotFound(id))?;
    let related = catalog.related(product, RELATED_LIMIT);
    let wishlisted = ctx.storefront.wishlist().contains(id);

    emit(&view::product_detail(product, &related, wishlisted));
    Ok(())
}
