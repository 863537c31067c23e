//! Integration tests for catalog browsing feeding the stores.

#![allow(clippy::unwrap_used)]

use luxe_core::{Price, ProductId};
use luxe_integration_tests::{reopen, sample_catalog, temp_storefront};
use luxe_storefront::catalog::RELATED_LIMIT;
use luxe_storefront::{ShopFilter, SortBy, StorefrontError};

#[test]
fn test_shop_listing_into_cart() {
    let catalog = sample_catalog();
    let (_dir, mut storefront) = temp_storefront();

    let filter = ShopFilter {
        category: Some("Watches".to_string()),
        max_price: Some(Price::from(2000)),
        sort: SortBy::PriceAsc,
    };
    let listing = catalog.browse(&filter);
    assert_eq!(listing.len(), 1);

    storefront
        .cart_mut()
        .add_items(listing[0].clone(), 2)
        .unwrap();
    assert_eq!(storefront.cart().subtotal(), Price::from(3600));
}

#[test]
fn test_search_then_wishlist_then_move_to_cart() {
    let catalog = sample_catalog();
    let (dir, mut storefront) = temp_storefront();

    let hits = catalog.search("leather");
    let ids: Vec<i64> = hits.iter().map(|p| p.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 5]);

    for hit in hits {
        storefront.wishlist_mut().toggle(hit.clone()).unwrap();
    }
    storefront.move_to_cart(ProductId::new(5)).unwrap();

    let reopened = reopen(&dir);
    assert_eq!(reopened.wishlist().len(), 2);
    assert_eq!(reopened.cart().subtotal(), Price::from(900));
}

#[test]
fn test_move_to_cart_requires_wishlist_entry() {
    let (_dir, mut storefront) = temp_storefront();
    let err = storefront.move_to_cart(ProductId::new(1)).unwrap_err();
    assert!(matches!(err, StorefrontError::ProductNotFound(_)));
}

#[test]
fn test_product_page_data() {
    let catalog = sample_catalog();
    let chrono = catalog.find(ProductId::new(1)).unwrap();
    let related: Vec<i64> = catalog
        .related(chrono, RELATED_LIMIT)
        .iter()
        .map(|p| p.id.as_i64())
        .collect();
    assert_eq!(related, vec![3]);

    let tote = catalog.find(ProductId::new(2)).unwrap();
    assert_eq!(tote.discount_percent(), Some(25));
    assert_eq!(chrono.discount_percent(), None);
}

#[test]
fn test_categories_for_filter_bar() {
    assert_eq!(
        sample_catalog().categories(),
        vec!["All", "Watches", "Bags", "Accessories"]
    );
}
