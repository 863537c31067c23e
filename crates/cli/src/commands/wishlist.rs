//! Wishlist commands.

use luxe_core::ProductId;
use luxe_storefront::Toggled;
use luxe_storefront::error::Result;

use super::{Context, emit};
use crate::view;

pub fn show(ctx: &Context) {
    emit(&view::wishlist(ctx.storefront.wishlist()));
}

/// Save or unsave a product.
///
/// Products already on the wishlist are matched by ID without consulting the
/// catalog, so entries for products that have left the catalog can still be
/// removed.
///
/// # Errors
///
/// Returns an error if the product is unknown or the wishlist cannot be saved.
pub fn toggle(ctx: &mut Context, id: ProductId) -> Result<()> {
    let product = match ctx.storefront.wishlist().get(id) {
        Some(saved) => saved.clone(),
        None => ctx.product(id)?,
    };
    let name = product.name.clone();

    let result = ctx.storefront.wishlist_mut().toggle(product);
    if let Ok(change) = &result {
        let verb = match change {
            Toggled::Added => "Saved",
            Toggled::Removed => "Removed",
        };
        emit(&format!("{verb} {name}"));
    }
    show(ctx);
    result.map(|_| ()).map_err(Into::into)
}

/// Add a saved product to the cart, keeping it on the wishlist.
///
/// # Errors
///
/// Returns an error if the product is not saved or the cart cannot be saved.
pub fn move_to_cart(ctx: &mut Context, id: ProductId) -> Result<()> {
    let moved = ctx.storefront.move_to_cart(id);
    if !matches!(&moved, Err(e) if !e.is_applied()) {
        emit(&view::cart(ctx.storefront.cart()));
    }
    moved
}
