//! Shared test doubles for cart scenario tests.
//!
//! The cart store is generic over its collaborators, so the scenarios in
//! `tests/` run against these in-memory fakes: a catalog with adjustable
//! stock and simulated outages, a single-slot snapshot store with
//! injectable save failures, and a notifier that records every message.
//!
//! All three are cheaply cloneable handles over shared state, so a test
//! can keep a handle after moving a clone into the store.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rust_decimal::Decimal;

use shoebox_cart::catalog::{Catalog, CatalogError};
use shoebox_cart::notify::Notifier;
use shoebox_cart::storage::{SnapshotStore, StorageError};
use shoebox_core::{Cart, ProductId, ProductRecord, StockLevel};

/// Build a product record for tests.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal string.
#[must_use]
pub fn product(id: i32, name: &str, price: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        price: price.parse::<Decimal>().expect("valid decimal price"),
        image: format!("https://cdn.example.com/{id}.jpg"),
    }
}

// =============================================================================
// FakeCatalog
// =============================================================================

/// In-memory catalog with adjustable stock and simulated outages.
///
/// Unknown products answer 404, mirroring the REST catalog. When failing,
/// every lookup answers 500.
#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    inner: Arc<FakeCatalogInner>,
}

#[derive(Debug, Default)]
struct FakeCatalogInner {
    products: Mutex<HashMap<ProductId, ProductRecord>>,
    stock: Mutex<HashMap<ProductId, i64>>,
    failing: AtomicBool,
    stock_calls: AtomicUsize,
}

impl FakeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with an initial stock level.
    #[must_use]
    pub fn with_product(self, record: ProductRecord, stock: i64) -> Self {
        self.inner
            .products
            .lock()
            .expect("products lock")
            .insert(record.id, record.clone());
        self.set_stock(record.id, stock);
        self
    }

    /// Set the stock level for a product (also for products with no record,
    /// to simulate a catalog where the stock and product endpoints disagree).
    pub fn set_stock(&self, id: ProductId, amount: i64) {
        self.inner.stock.lock().expect("stock lock").insert(id, amount);
    }

    /// Make every subsequent lookup fail with a server error.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stock lookups performed so far.
    #[must_use]
    pub fn stock_calls(&self) -> usize {
        self.inner.stock_calls.load(Ordering::SeqCst)
    }
}

fn catalog_error(status: reqwest::StatusCode, path: &str) -> CatalogError {
    CatalogError::Status {
        status,
        url: format!("http://catalog.test/{path}"),
    }
}

impl Catalog for FakeCatalog {
    async fn stock_level(&self, id: ProductId) -> Result<StockLevel, CatalogError> {
        self.inner.stock_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(catalog_error(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                &format!("stock/{id}"),
            ));
        }
        let stock = self.inner.stock.lock().expect("stock lock");
        stock
            .get(&id)
            .map(|&amount| StockLevel { id, amount })
            .ok_or_else(|| catalog_error(reqwest::StatusCode::NOT_FOUND, &format!("stock/{id}")))
    }

    async fn product(&self, id: ProductId) -> Result<ProductRecord, CatalogError> {
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(catalog_error(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                &format!("products/{id}"),
            ));
        }
        let products = self.inner.products.lock().expect("products lock");
        products
            .get(&id)
            .cloned()
            .ok_or_else(|| catalog_error(reqwest::StatusCode::NOT_FOUND, &format!("products/{id}")))
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Single-slot snapshot store held in memory, with injectable save failures.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    slot: Mutex<Option<Cart>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    /// The cart currently persisted in the slot, if any.
    #[must_use]
    pub fn persisted(&self) -> Option<Cart> {
        self.inner.slot.lock().expect("slot lock").clone()
    }
}

impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<Cart>, StorageError> {
        Ok(self.inner.slot.lock().expect("slot lock").clone())
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        *self.inner.slot.lock().expect("slot lock") = Some(cart.clone());
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// =============================================================================
// RecordingNotifier
// =============================================================================

/// Notifier that records every message it is asked to display.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages displayed so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages lock").clone()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages.lock().expect("messages lock").last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("messages lock")
            .push(message.to_string());
    }
}
