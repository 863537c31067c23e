//! Wishlist store.
//!
//! An insertion-ordered set of saved products keyed by product ID, flushed
//! to the `luxe_wishlist` record after every toggle.

use luxe_core::{Product, ProductId};
use tracing::instrument;

use crate::persistence::{PersistError, PersistenceGateway, StorageArea, keys};

/// Membership change produced by [`WishlistStore::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Saved products.
#[derive(Debug)]
pub struct WishlistStore<S> {
    items: Vec<Product>,
    gateway: PersistenceGateway<S>,
}

impl<S: StorageArea> WishlistStore<S> {
    /// Hydrate the wishlist from storage. A missing or corrupt record yields
    /// an empty wishlist.
    pub fn hydrate(storage: S) -> Self {
        let gateway = PersistenceGateway::new(storage);
        let items = gateway.load(keys::WISHLIST);
        Self { items, gateway }
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove `product` if it is saved, otherwise append it unchanged.
    ///
    /// Toggling the same product twice restores the previous wishlist,
    /// including the order of every other entry.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails. The membership change is
    /// applied either way.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn toggle(&mut self, product: Product) -> Result<Toggled, PersistError> {
        let change = match self.items.iter().position(|item| item.id == product.id) {
            Some(idx) => {
                self.items.remove(idx);
                Toggled::Removed
            }
            None => {
                self.items.push(product);
                Toggled::Added
            }
        };
        tracing::debug!(?change, "Toggled wishlist entry");

        self.gateway.save(keys::WISHLIST, &self.items)?;
        Ok(change)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use luxe_core::Price;

    use crate::persistence::MemoryStorage;

    use super::*;

    fn product(id: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::from(10))
    }

    fn wishlist() -> WishlistStore<Arc<MemoryStorage>> {
        WishlistStore::hydrate(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_toggle_scenario() {
        let mut wishlist = wishlist();

        assert_eq!(wishlist.toggle(product(7)).unwrap(), Toggled::Added);
        assert_eq!(wishlist.items(), &[product(7)]);

        assert_eq!(wishlist.toggle(product(7)).unwrap(), Toggled::Removed);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let mut wishlist = wishlist();
        for id in [1, 2, 3] {
            wishlist.toggle(product(id)).unwrap();
        }
        let before = wishlist.items().to_vec();

        wishlist.toggle(product(2)).unwrap();
        assert!(!wishlist.contains(ProductId::new(2)));
        wishlist.toggle(product(2)).unwrap();

        // The re-added entry goes to the end; the others keep their order.
        let ids: Vec<i64> = wishlist.items().iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(wishlist.len(), before.len());

        wishlist.toggle(product(4)).unwrap();
        wishlist.toggle(product(4)).unwrap();
        let ids: Vec<i64> = wishlist.items().iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_toggle_matches_by_id_only() {
        let mut wishlist = wishlist();
        wishlist.toggle(product(5)).unwrap();

        let renamed = Product::new(ProductId::new(5), "Renamed", Price::from(99));
        assert_eq!(wishlist.toggle(renamed).unwrap(), Toggled::Removed);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_flushes_and_rehydrates() {
        let storage = Arc::new(MemoryStorage::new());
        let mut wishlist = WishlistStore::hydrate(Arc::clone(&storage));
        wishlist.toggle(product(1)).unwrap();
        wishlist.toggle(product(2)).unwrap();

        let reloaded = WishlistStore::hydrate(Arc::clone(&storage));
        assert_eq!(reloaded.items(), wishlist.items());
        assert_eq!(
            reloaded.get(ProductId::new(2)).map(|p| p.name.as_str()),
            Some("Product 2")
        );
    }

    #[test]
    fn test_failed_flush_keeps_change() {
        let mut wishlist = WishlistStore::hydrate(MemoryStorage::with_quota(4));
        let result = wishlist.toggle(product(1));

        assert!(result.is_err());
        assert!(wishlist.contains(ProductId::new(1)));
    }
}
