//! Shoebox cart engine.
//!
//! Owns the in-memory cart, mediates additions, removals, and quantity
//! updates against the remote stock-and-product catalog, and persists a
//! snapshot of the cart to local storage after every successful mutation.
//!
//! # Architecture
//!
//! [`store::CartStore`] is the single entry point. It is generic over its
//! three collaborators so the mutation logic can be tested without a
//! network or a filesystem:
//!
//! - [`catalog::Catalog`] - fetch live stock and base product data
//! - [`storage::SnapshotStore`] - the single persisted cart slot
//! - [`notify::Notifier`] - surface a user-facing error message
//!
//! Operations return typed [`error::CartError`] results; the store also
//! reports the storefront's literal user messages through the notifier, so
//! callers that only care about the toast can ignore the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoebox_cart::{CartConfig, CartStore, FileSnapshotStore, HttpCatalog, TracingNotifier};
//! use shoebox_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let store = CartStore::open(
//!     HttpCatalog::new(&config.api_base_url),
//!     FileSnapshotStore::new(&config.snapshot_path),
//!     TracingNotifier,
//! )
//! .await?;
//!
//! store.add_item(ProductId::new(5)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use catalog::{Catalog, CatalogError, HttpCatalog};
pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use notify::{Notifier, TracingNotifier, messages};
pub use storage::{FileSnapshotStore, SnapshotStore, StorageError};
pub use store::CartStore;
