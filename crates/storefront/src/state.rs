//! Storefront state shared by the views.
//!
//! Views receive a `Storefront` explicitly instead of reaching for global
//! state. It owns one cart and one wishlist over a shared storage backend;
//! each store writes only its own record.

use std::sync::Arc;

use luxe_core::ProductId;

use crate::cart::CartStore;
use crate::error::{Result, StorefrontError};
use crate::persistence::StorageArea;
use crate::wishlist::WishlistStore;

/// Cart and wishlist stores for one storefront session.
#[derive(Debug)]
pub struct Storefront<S> {
    cart: CartStore<Arc<S>>,
    wishlist: WishlistStore<Arc<S>>,
    storage: Arc<S>,
}

impl<S: StorageArea> Storefront<S> {
    /// Hydrate both stores from `storage`.
    pub fn hydrate(storage: S) -> Self {
        let storage = Arc::new(storage);
        let cart = CartStore::hydrate(Arc::clone(&storage));
        let wishlist = WishlistStore::hydrate(Arc::clone(&storage));

        tracing::info!(
            cart_lines = cart.items().len(),
            wishlist_items = wishlist.len(),
            "Storefront hydrated"
        );

        Self {
            cart,
            wishlist,
            storage,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<Arc<S>> {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore<Arc<S>> {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore<Arc<S>> {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore<Arc<S>> {
        &mut self.wishlist
    }

    /// Get a reference to the shared storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of a saved product to the cart.
    ///
    /// The product stays on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if the product is not on the
    /// wishlist, or `StorefrontError::Persist` if the cart flush fails.
    pub fn move_to_cart(&mut self, id: ProductId) -> Result<()> {
        let product = self
            .wishlist
            .get(id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(id))?;
        self.cart.add_item(product)?;
        Ok(())
    }
}
