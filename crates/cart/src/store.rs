//! The cart store: validate, persist, publish.
//!
//! Every mutation follows the same shape: take the store lock, fetch
//! whatever the catalog must confirm, compute the next cart as a pure
//! value, write the snapshot, and only then publish the next cart to
//! memory. A failure at any step leaves the in-memory cart exactly as it
//! was.
//!
//! Operations are serialized by an async mutex held across the remote
//! fetches, so concurrent calls apply atomically in lock order instead of
//! racing last-write-wins on the shared list.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::instrument;

use shoebox_core::{Cart, CartItem, ProductId};

use crate::catalog::Catalog;
use crate::error::CartError;
use crate::notify::{Notifier, messages};
use crate::storage::{SnapshotStore, StorageError};

/// In-memory cart with catalog-checked mutations and snapshot persistence.
///
/// Cheaply cloneable; clones share the same cart, so a UI layer can hand
/// out handles freely.
#[derive(Debug)]
pub struct CartStore<C, S, N> {
    inner: Arc<CartStoreInner<C, S, N>>,
}

impl<C, S, N> Clone for CartStore<C, S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct CartStoreInner<C, S, N> {
    catalog: C,
    storage: S,
    notifier: N,
    cart: Mutex<Cart>,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: Catalog,
    S: SnapshotStore,
    N: Notifier,
{
    /// Open the store, loading the persisted snapshot (empty if absent).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing snapshot cannot be read or is
    /// corrupt. A missing snapshot is not an error.
    pub async fn open(catalog: C, storage: S, notifier: N) -> Result<Self, StorageError> {
        let cart = storage.load().await?.unwrap_or_default();
        tracing::debug!(lines = cart.len(), "cart store opened");
        Ok(Self {
            inner: Arc::new(CartStoreInner {
                catalog,
                storage,
                notifier,
                cart: Mutex::new(cart),
            }),
        })
    }

    /// Read-only snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.inner.cart.lock().await.clone()
    }

    /// Read-only snapshot of the current line items.
    pub async fn items(&self) -> Vec<CartItem> {
        self.inner.cart.lock().await.items().to_vec()
    }

    /// Add one unit of a product to the cart.
    ///
    /// Increments the existing line, or fetches the product record and
    /// appends a new line with quantity 1. Always checks the incremented
    /// quantity against live stock first.
    ///
    /// # Errors
    ///
    /// `OutOfStock` if the incremented quantity exceeds live stock;
    /// `Catalog` if either fetch fails; `Storage` if persisting fails.
    /// All failures leave the cart unchanged.
    #[instrument(skip(self))]
    pub async fn add_item(&self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_add(product_id).await;
        if let Err(e) = &result {
            self.report(e, messages::ADD_FAILED);
        }
        result
    }

    /// Remove a product's line from the cart.
    ///
    /// # Errors
    ///
    /// `NotInCart` if the product has no line; `Storage` if persisting
    /// fails. All failures leave the cart unchanged.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_remove(product_id).await;
        if let Err(e) = &result {
            self.report(e, messages::REMOVE_FAILED);
        }
        result
    }

    /// Set a product's quantity to exactly `amount`.
    ///
    /// Live stock is re-fetched on every call, even when `amount` equals
    /// the current quantity.
    ///
    /// # Errors
    ///
    /// `OutOfStock` if `amount` is not positive or exceeds live stock;
    /// `NotInCart` if the product has no line; `Catalog` if the stock
    /// fetch fails; `Storage` if persisting fails. All failures leave the
    /// cart unchanged.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let result = self.try_update(product_id, amount).await;
        if let Err(e) = &result {
            self.report(e, messages::UPDATE_FAILED);
        }
        result
    }

    async fn try_add(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut cart = self.inner.cart.lock().await;

        let stock = self.inner.catalog.stock_level(product_id).await?;
        let requested = cart.quantity_of(product_id) + 1;
        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let next = match cart.with_quantity(product_id, requested) {
            Some(next) => next,
            None => {
                let product = self.inner.catalog.product(product_id).await?;
                cart.with_appended(CartItem::from_product(product, 1))
            }
        };

        self.commit(&mut cart, next).await
    }

    async fn try_remove(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut cart = self.inner.cart.lock().await;

        let next = cart
            .without(product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        self.commit(&mut cart, next).await
    }

    async fn try_update(&self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        let mut cart = self.inner.cart.lock().await;

        // Stock is fetched before the amount is validated, so a catalog
        // failure surfaces as the generic update failure even for a
        // non-positive amount.
        let stock = self.inner.catalog.stock_level(product_id).await?;
        if amount <= 0 || amount > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let next = cart
            .with_quantity(product_id, amount)
            .ok_or(CartError::NotInCart(product_id))?;

        self.commit(&mut cart, next).await
    }

    /// Persist `next`, then publish it. The in-memory cart only changes
    /// once the snapshot write has succeeded.
    async fn commit(&self, cart: &mut Cart, next: Cart) -> Result<(), CartError> {
        self.inner.storage.save(&next).await?;
        *cart = next;
        Ok(())
    }

    /// Surface a failure: the stock-exceeded category keeps its distinct
    /// message, everything else collapses to the operation's generic one.
    fn report(&self, error: &CartError, fallback: &'static str) {
        let message = if error.is_out_of_stock() {
            messages::OUT_OF_STOCK
        } else {
            fallback
        };
        tracing::warn!(error = %error, "cart operation failed");
        self.inner.notifier.error(message);
    }
}
