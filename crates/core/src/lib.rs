//! Luxe Core - Shared types library.
//!
//! This crate provides the domain types used across all Luxe components:
//! - `storefront` - Cart and wishlist stores, persistence, catalog browsing
//! - `cli` - Command-line storefront over a local data directory
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. The
//! serialized form of these types is the durable record format, so any change
//! to their serde attributes is a change to persisted data.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, products and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
