//! Catalog products and cart line items.
//!
//! Both types are stored as-is in durable records, so their JSON shape is the
//! persisted format: camelCase keys, unknown display fields preserved in
//! `extra`, and line items written as the product object plus a `qty` key.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// A product record as supplied by the catalog.
///
/// Wishlist entries are stored as this type verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pre-sale price, shown struck through next to `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Display fields the storefront core does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product with only the fields the stores rely on.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            category: String::new(),
            rating: None,
            description: None,
            original_price: None,
            extra: Map::new(),
        }
    }

    /// Set the category (builder style).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the rating (builder style).
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Percentage saved against `original_price`, rounded to the nearest
    /// whole percent.
    ///
    /// Returns `None` when there is no original price or it is zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<i64> {
        let original = self.original_price?.amount();
        if original.is_zero() {
            return None;
        }
        let ratio = Decimal::ONE - self.price.amount() / original;
        (ratio * Decimal::ONE_HUNDRED).round().to_i64()
    }
}

/// A product in the cart together with its quantity.
///
/// The quantity is never zero; a line whose quantity would reach zero is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub qty: NonZeroU32,
}

impl LineItem {
    /// Start a new line for `product` with a quantity of one.
    #[must_use]
    pub fn new(mut product: Product) -> Self {
        // The line's own `qty` key would collide with a stray catalog field.
        product.extra.remove("qty");
        Self {
            product,
            qty: NonZeroU32::MIN,
        }
    }

    /// The product ID this line refers to.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.qty.get())
    }
}
