//! Shopping cart store.
//!
//! The cart is the single source of truth for line items. Every item mutation
//! is applied in memory first and then flushed to the `luxe_cart` record; the
//! returned `Result` describes only the flush, so callers can warn that a
//! change may not survive a restart without losing the change itself.
//!
//! The drawer's open/closed flag lives here too but is never persisted.

use std::num::NonZeroU32;

use luxe_core::{LineItem, Price, Product, ProductId};
use tracing::instrument;

use crate::persistence::{PersistError, PersistenceGateway, StorageArea, keys};

/// Cart line items plus the drawer flag.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    is_open: bool,
    gateway: PersistenceGateway<S>,
}

impl<S: StorageArea> CartStore<S> {
    /// Hydrate the cart from storage. A missing or corrupt record yields an
    /// empty cart. The drawer always starts closed.
    pub fn hydrate(storage: S) -> Self {
        let gateway = PersistenceGateway::new(storage);
        let items = gateway.load(keys::CART);
        Self {
            items,
            is_open: false,
            gateway,
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty.get())).sum()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with a quantity of one.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails. The item is added either way.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn add_item(&mut self, product: Product) -> Result<(), PersistError> {
        self.add_items(product, 1)
    }

    /// Add `count` units of `product` with a single flush.
    ///
    /// Equivalent to `count` calls to [`Self::add_item`]. A `count` of zero
    /// leaves the items untouched.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails. The items are added either way.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn add_items(&mut self, product: Product, count: u32) -> Result<(), PersistError> {
        if let Some(count) = NonZeroU32::new(count) {
            match self.items.iter_mut().find(|item| item.id() == product.id) {
                Some(existing) => existing.qty = existing.qty.saturating_add(count.get()),
                None => {
                    let mut line = LineItem::new(product);
                    line.qty = count;
                    self.items.push(line);
                }
            }
        }
        self.flush()
    }

    /// Remove the line for `id`. Removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) -> Result<(), PersistError> {
        self.items.retain(|item| item.id() != id);
        self.flush()
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or below removes the line. An absent product is
    /// left absent. Quantities above `u32::MAX` saturate.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails. The quantity is updated
    /// either way.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: ProductId, qty: i64) -> Result<(), PersistError> {
        let clamped = u32::try_from(qty.max(0)).unwrap_or(u32::MAX);
        match NonZeroU32::new(clamped) {
            None => self.items.retain(|item| item.id() != id),
            Some(qty) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
                    item.qty = qty;
                }
            }
        }
        self.flush()
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the flush fails.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), PersistError> {
        self.items.clear();
        self.flush()
    }

    pub const fn open(&mut self) {
        self.is_open = true;
    }

    pub const fn close(&mut self) {
        self.is_open = false;
    }

    pub const fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    fn flush(&self) -> Result<(), PersistError> {
        self.gateway.save(keys::CART, &self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::persistence::MemoryStorage;

    use super::*;

    fn product(id: i64, price: u32) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::from(price))
    }

    fn cart() -> CartStore<Arc<MemoryStorage>> {
        CartStore::hydrate(Arc::new(MemoryStorage::new()))
    }

    fn qty(cart: &CartStore<Arc<MemoryStorage>>, id: i64) -> Option<u32> {
        cart.get(ProductId::new(id)).map(|item| item.qty.get())
    }

    #[test]
    fn test_cart_scenario() {
        let mut cart = cart();

        cart.add_item(product(1, 100)).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(qty(&cart, 1), Some(1));
        assert_eq!(cart.subtotal(), Price::from(100));

        cart.add_item(product(1, 100)).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(qty(&cart, 1), Some(2));
        assert_eq!(cart.subtotal(), Price::from(200));

        cart.set_quantity(ProductId::new(1), 5).unwrap();
        assert_eq!(cart.subtotal(), Price::from(500));

        cart.remove_item(ProductId::new(1)).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_repeated_adds_count_per_id() {
        let mut cart = cart();
        let sequence = [3, 1, 3, 2, 3, 1];
        for id in sequence {
            cart.add_item(product(id, 10)).unwrap();
        }

        let ids: Vec<i64> = cart.items().iter().map(|i| i.id().as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(qty(&cart, 3), Some(3));
        assert_eq!(qty(&cart, 1), Some(2));
        assert_eq!(qty(&cart, 2), Some(1));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_items_matches_repeated_add_item() {
        let mut bulk = cart();
        let mut single = cart();

        bulk.add_item(product(1, 10)).unwrap();
        bulk.add_items(product(1, 10), 3).unwrap();
        bulk.add_items(product(2, 10), 2).unwrap();
        for id in [1, 1, 1, 1, 2, 2] {
            single.add_item(product(id, 10)).unwrap();
        }

        assert_eq!(bulk.items(), single.items());
    }

    #[test]
    fn test_add_items_zero_is_noop() {
        let mut cart = cart();
        cart.add_items(product(1, 10), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut via_zero = cart();
        let mut via_remove = cart();
        for cart in [&mut via_zero, &mut via_remove] {
            cart.add_item(product(1, 50)).unwrap();
            cart.add_item(product(2, 20)).unwrap();
        }

        via_zero.set_quantity(ProductId::new(1), 0).unwrap();
        via_remove.remove_item(ProductId::new(1)).unwrap();

        assert_eq!(via_zero.items(), via_remove.items());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = cart();
        cart.add_item(product(1, 50)).unwrap();
        cart.set_quantity(ProductId::new(1), -4).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = cart();
        cart.add_item(product(1, 50)).unwrap();
        let before = cart.items().to_vec();

        cart.set_quantity(ProductId::new(99), 4).unwrap();
        cart.remove_item(ProductId::new(99)).unwrap();

        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_set_quantity_saturates() {
        let mut cart = cart();
        cart.add_item(product(1, 1)).unwrap();
        cart.set_quantity(ProductId::new(1), i64::MAX).unwrap();
        assert_eq!(qty(&cart, 1), Some(u32::MAX));
    }

    #[test]
    fn test_subtotal_saturates_on_huge_lines() {
        let vault: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Vault", "price": 1e20}"#).unwrap();
        let mut cart = cart();
        cart.add_item(vault).unwrap();
        cart.add_item(product(2, 20)).unwrap();
        cart.set_quantity(ProductId::new(1), 1_000_000_000).unwrap();

        assert_eq!(cart.subtotal(), Price::MAX);
        assert_eq!(cart.item_count(), 1_000_000_001);
    }

    #[test]
    fn test_subtotal_mixed_lines() {
        let mut cart = cart();
        cart.add_item(product(1, 50)).unwrap();
        cart.add_item(product(2, 20)).unwrap();
        cart.set_quantity(ProductId::new(2), 3).unwrap();

        assert_eq!(cart.subtotal(), Price::from(110));
    }

    #[test]
    fn test_clear_flushes_empty_array() {
        let storage = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::hydrate(Arc::clone(&storage));
        cart.add_item(product(1, 50)).unwrap();
        cart.clear().unwrap();

        assert!(cart.is_empty());
        assert_eq!(storage.get_item(keys::CART).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_mutations_flush_and_rehydrate() {
        let storage = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::hydrate(Arc::clone(&storage));
        cart.add_item(product(1, 50)).unwrap();
        cart.add_item(product(2, 20)).unwrap();
        cart.set_quantity(ProductId::new(2), 3).unwrap();

        let reloaded = CartStore::hydrate(Arc::clone(&storage));
        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(reloaded.subtotal(), Price::from(110));
    }

    #[test]
    fn test_drawer_flag_is_not_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::hydrate(Arc::clone(&storage));

        cart.toggle_open();
        assert!(cart.is_open());
        cart.close();
        assert!(!cart.is_open());
        cart.open();
        assert!(cart.is_open());

        assert!(storage.is_empty());
        assert!(!CartStore::hydrate(Arc::clone(&storage)).is_open());
    }

    #[test]
    fn test_failed_flush_keeps_mutation() {
        let mut cart = CartStore::hydrate(MemoryStorage::with_quota(4));
        let result = cart.add_item(product(1, 50));

        assert!(matches!(result, Err(PersistError::Write { .. })));
        assert_eq!(cart.get(ProductId::new(1)).map(|item| item.qty.get()), Some(1));
    }

    #[test]
    fn test_hydrate_corrupt_record_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(keys::CART, "{\"items\": []}").unwrap();

        let cart = CartStore::hydrate(Arc::clone(&storage));
        assert!(cart.is_empty());
    }
}
