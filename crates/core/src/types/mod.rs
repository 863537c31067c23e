//! Core types for Luxe.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{Price, PriceError};
pub use product::{LineItem, Product};
