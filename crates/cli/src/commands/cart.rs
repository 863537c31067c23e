//! Cart commands.
//!
//! Mutations always render the resulting cart before reporting a failed
//! flush, since the change itself was applied.

use luxe_core::ProductId;
use luxe_storefront::error::Result;

use super::{Context, emit};
use crate::view;

pub fn show(ctx: &Context) {
    emit(&view::cart(ctx.storefront.cart()));
}

/// Add `qty` units of a catalog product.
///
/// # Errors
///
/// Returns an error if the product is unknown or the cart cannot be saved.
pub fn add(ctx: &mut Context, id: ProductId, qty: u32) -> Result<()> {
    let product = ctx.product(id)?;
    let cart = ctx.storefront.cart_mut();
    let flushed = cart.add_items(product, qty);
    cart.open();
    show(ctx);
    Ok(flushed?)
}

/// Remove a product's line.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(ctx: &mut Context, id: ProductId) -> Result<()> {
    let flushed = ctx.storefront.cart_mut().remove_item(id);
    show(ctx);
    Ok(flushed?)
}

/// Set a line's quantity; zero or below removes it.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn set_quantity(ctx: &mut Context, id: ProductId, qty: i64) -> Result<()> {
    let flushed = ctx.storefront.cart_mut().set_quantity(id, qty);
    show(ctx);
    Ok(flushed?)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear(ctx: &mut Context) -> Result<()> {
    let flushed = ctx.storefront.cart_mut().clear();
    show(ctx);
    Ok(flushed?)
}
