//! Shoebox Core - Shared domain types.
//!
//! This crate provides the types shared across all Shoebox components:
//! - `cart` - The cart store and its collaborators
//! - `cli` - Command-line cart client
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no filesystem access. Cart mutations are expressed as pure
//! functions from a cart to the next cart, so they can be tested without
//! a catalog or a storage backend.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and price formatting
//! - [`cart`] - Cart line items and the ordered cart container
//! - [`catalog`] - Records served by the stock-and-product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{ProductRecord, StockLevel};
pub use types::*;
