//! Plain-text rendering of storefront state.
//!
//! Rendering is kept separate from the commands so it can be tested without
//! touching stdout.

use luxe_core::{LineItem, Product};
use luxe_storefront::{CartStore, StorageArea, WishlistStore};

fn rating(product: &Product) -> String {
    product
        .rating
        .map_or_else(String::new, |r| format!("  ★ {r:.1}"))
}

/// One catalog product per line.
#[must_use]
pub fn product_row(product: &Product) -> String {
    format!(
        "#{:<5} {:<28} {:>12}  {}{}",
        product.id,
        product.name,
        product.price.display(),
        product.category,
        rating(product)
    )
}

/// A titled product listing with an item count.
#[must_use]
pub fn listing(title: &str, products: &[&Product]) -> String {
    let mut lines = vec![format!("{title} ({} items)", products.len())];
    if products.is_empty() {
        lines.push("No products found".to_string());
    }
    lines.extend(products.iter().map(|p| product_row(p)));
    lines.join("\n")
}

fn line_row(item: &LineItem) -> String {
    format!(
        "#{:<5} {:<28} {:>4} x {:>12} = {:>12}",
        item.id(),
        item.product.name,
        item.qty,
        item.product.price.display(),
        item.line_total().display()
    )
}

/// The cart drawer: lines, unit count and subtotal.
#[must_use]
pub fn cart<S: StorageArea>(cart: &CartStore<S>) -> String {
    if cart.is_empty() {
        return "Your cart is empty".to_string();
    }

    let mut lines = vec![format!("Your Cart ({} items)", cart.item_count())];
    lines.extend(cart.items().iter().map(line_row));
    lines.push(format!("Subtotal: {}", cart.subtotal().display()));
    lines.join("\n")
}

/// Saved products.
#[must_use]
pub fn wishlist<S: StorageArea>(wishlist: &WishlistStore<S>) -> String {
    if wishlist.is_empty() {
        return "Your wishlist is empty".to_string();
    }

    let noun = if wishlist.len() == 1 { "item" } else { "items" };
    let mut lines = vec![format!("{} {noun} saved", wishlist.len())];
    lines.extend(wishlist.items().iter().map(product_row));
    lines.join("\n")
}

/// Product page: details, sale price, wishlist state and related products.
#[must_use]
pub fn product_detail(product: &Product, related: &[&Product], wishlisted: bool) -> String {
    let mut lines = vec![
        format!("{} (#{})", product.name, product.id),
        format!("Category: {}", product.category),
    ];

    let mut price = format!("Price: {}", product.price.display());
    if let (Some(original), Some(discount)) = (product.original_price, product.discount_percent())
    {
        price.push_str(&format!(" (was {}, -{discount}%)", original.display()));
    }
    lines.push(price);

    if let Some(r) = product.rating {
        lines.push(format!("Rating: {r:.1} / 5"));
    }
    if let Some(description) = &product.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.push(String::new());
    lines.push(if wishlisted {
        "♥ On your wishlist".to_string()
    } else {
        "♡ Not on your wishlist".to_string()
    });

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("You may also like".to_string());
        lines.extend(related.iter().map(|p| product_row(p)));
    }

    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_core::{Price, ProductId};
    use luxe_storefront::MemoryStorage;

    use super::*;

    fn product(id: i64, price: u32) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::from(price))
            .with_category("Bags")
    }

    #[test]
    fn test_cart_view_empty() {
        let store = CartStore::hydrate(MemoryStorage::new());
        assert_eq!(cart(&store), "Your cart is empty");
    }

    #[test]
    fn test_cart_view_lines_and_subtotal() {
        let mut store = CartStore::hydrate(MemoryStorage::new());
        store.add_item(product(1, 50)).unwrap();
        store.add_items(product(2, 20), 3).unwrap();

        let text = cart(&store);
        assert!(text.starts_with("Your Cart (4 items)"));
        assert!(text.contains("Product 2"));
        assert!(text.contains("$60.00"));
        assert!(text.ends_with("Subtotal: $110.00"));
    }

    #[test]
    fn test_wishlist_view_pluralizes() {
        let mut store = WishlistStore::hydrate(MemoryStorage::new());
        assert_eq!(wishlist(&store), "Your wishlist is empty");

        store.toggle(product(1, 10)).unwrap();
        assert!(wishlist(&store).starts_with("1 item saved"));

        store.toggle(product(2, 10)).unwrap();
        assert!(wishlist(&store).starts_with("2 items saved"));
    }

    #[test]
    fn test_product_detail_shows_discount_and_related() {
        let mut tote = product(1, 450);
        tote.original_price = Some(Price::from(600));
        let related = product(2, 900);

        let text = product_detail(&tote, &[&related], true);
        assert!(text.contains("Price: $450.00 (was $600.00, -25%)"));
        assert!(text.contains("♥ On your wishlist"));
        assert!(text.contains("You may also like"));
        assert!(text.contains("Product 2"));
    }

    #[test]
    fn test_product_row_shows_rating_when_present() {
        let rated = product(7, 1200).with_rating(4.6);
        assert!(product_row(&rated).ends_with("Bags  ★ 4.6"));
        assert!(product_row(&product(8, 10)).ends_with("Bags"));
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(listing("All Products", &[]), "All Products (0 items)\nNo products found");
    }
}
