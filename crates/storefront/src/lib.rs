//! Luxe Storefront library.
//!
//! Client-side storefront core: the cart and wishlist stores, the durable
//! persistence they flush to, and the catalog queries the views run.
//!
//! # Flow
//!
//! A view dispatches an intent into a store; the store mutates its state
//! synchronously and immediately flushes it through the
//! [`persistence::PersistenceGateway`]. Hydration happens once, when the
//! [`Storefront`] is built.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;
pub mod state;
pub mod wishlist;

pub use cart::CartStore;
pub use catalog::{Catalog, ShopFilter, SortBy};
pub use config::{LogFormat, StorefrontConfig};
pub use error::StorefrontError;
pub use persistence::{FileStorage, MemoryStorage, PersistenceGateway, StorageArea};
pub use state::Storefront;
pub use wishlist::{Toggled, WishlistStore};
