//! Integration tests for the Luxe storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_persistence` - Hydrate/flush round-trips through on-disk records
//! - `storefront_catalog` - Catalog browsing feeding the stores
//!
//! This crate only holds shared fixtures; the tests live in `tests/`.

use luxe_core::{Price, Product, ProductId};
use luxe_storefront::{Catalog, FileStorage, Storefront};
use tempfile::TempDir;

/// A small catalog covering several categories, ratings and a sale price.
pub const SAMPLE_CATALOG: &str = r#"[
    {"id": 1, "name": "Heritage Chronograph", "price": 2400, "image": "/img/1.jpg",
     "category": "Watches", "rating": 4.8, "description": "Swiss automatic movement"},
    {"id": 2, "name": "Leather Tote", "price": 450, "originalPrice": 600, "image": "/img/2.jpg",
     "category": "Bags", "rating": 4.2, "badge": "Sale"},
    {"id": 3, "name": "Diver 300", "price": 1800, "image": "/img/3.jpg",
     "category": "Watches", "rating": 4.9},
    {"id": 4, "name": "Silk Scarf", "price": 180, "image": "/img/4.jpg",
     "category": "Accessories"},
    {"id": 5, "name": "Weekender", "price": 900, "image": "/img/5.jpg",
     "category": "Bags", "rating": 4.4, "description": "Full-grain leather duffel"}
]"#;

/// Parse [`SAMPLE_CATALOG`].
///
/// # Panics
///
/// Panics if the fixture is malformed.
#[must_use]
#[allow(clippy::expect_used)]
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG).expect("sample catalog is valid")
}

/// Build a minimal product.
#[must_use]
pub fn product(id: i64, price: u32) -> Product {
    Product::new(ProductId::new(id), format!("Product {id}"), Price::from(price))
}

/// A storefront over a fresh temporary data directory.
///
/// Keep the returned `TempDir` alive for as long as the storefront is used.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
#[must_use]
#[allow(clippy::expect_used)]
pub fn temp_storefront() -> (TempDir, Storefront<FileStorage>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storefront = Storefront::hydrate(FileStorage::new(dir.path()));
    (dir, storefront)
}

/// Simulate a restart: hydrate a new storefront over the same directory.
#[must_use]
pub fn reopen(dir: &TempDir) -> Storefront<FileStorage> {
    Storefront::hydrate(FileStorage::new(dir.path()))
}
