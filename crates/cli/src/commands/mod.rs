//! Command implementations.
//!
//! Each command receives a [`Context`] holding the hydrated storefront and
//! the catalog location. The catalog is only read by commands that need it.

pub mod browse;
pub mod cart;
pub mod wishlist;

use std::path::PathBuf;

use luxe_core::{Product, ProductId};
use luxe_storefront::error::{Result, StorefrontError};
use luxe_storefront::{Catalog, FileStorage, Storefront};

/// Everything a command needs to run.
pub struct Context {
    pub storefront: Storefront<FileStorage>,
    catalog_path: PathBuf,
}

impl Context {
    /// Hydrate the storefront from `data_dir`.
    #[must_use]
    pub fn new(data_dir: PathBuf, catalog_path: PathBuf) -> Self {
        tracing::debug!(data_dir = %data_dir.display(), "Opening data directory");
        Self {
            storefront: Storefront::hydrate(FileStorage::new(data_dir)),
            catalog_path,
        }
    }

    /// Read the catalog file.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Catalog` if the file cannot be read or parsed.
    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::load(&self.catalog_path)?)
    }

    /// Resolve a product ID against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if no such product exists.
    pub fn product(&self, id: ProductId) -> Result<Product> {
        self.catalog()?
            .find(id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(id))
    }
}

/// Write command output to stdout.
#[allow(clippy::print_stdout)]
pub fn emit(text: &str) {
    println!("{text}");
}
