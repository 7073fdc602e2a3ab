//! Durable cart snapshot storage.
//!
//! The cart is persisted as a single slot holding the whole serialized
//! list - no incremental diffs. The slot is read once when the store is
//! opened and overwritten wholesale after every successful mutation.
//!
//! On disk the slot is a versioned JSON envelope so a future format change
//! is rejected as unsupported instead of being misread.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shoebox_core::{Cart, CartItem};

/// Current snapshot envelope version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from snapshot storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored slot did not parse as a snapshot.
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Stored slot has an envelope version this build does not understand.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

/// Persisted representation of the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
}

impl Snapshot {
    /// Capture the current cart.
    #[must_use]
    pub fn of_cart(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            items: cart.items().to_vec(),
        }
    }

    /// Decode a stored slot, rejecting unknown envelope versions.
    ///
    /// # Errors
    ///
    /// Returns `Corrupt` if the slot is not valid snapshot JSON, or
    /// `UnsupportedVersion` for an envelope version this build does not
    /// understand.
    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }

    /// Encode for storage.
    ///
    /// # Errors
    ///
    /// Returns `Corrupt` if serialization fails (it cannot for well-formed
    /// carts, but the serializer's contract is fallible).
    pub fn encode(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reconstruct the cart this snapshot captured.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        Cart::from_items(self.items)
    }
}

/// Capability to load and overwrite the persisted cart slot.
#[allow(async_fn_in_trait)]
pub trait SnapshotStore {
    /// Load the persisted cart, `None` if no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be read.
    async fn load(&self) -> Result<Option<Cart>, StorageError>;

    /// Overwrite the slot with the given cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// Snapshot slot backed by a single JSON file on local disk.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write cannot leave a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || std::ffi::OsString::from("snapshot"),
            std::ffi::OsStr::to_os_string,
        );
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<Cart>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };
        let snapshot = Snapshot::decode(&raw)?;
        Ok(Some(snapshot.into_cart()))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let encoded = Snapshot::of_cart(cart).encode()?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, encoded).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use shoebox_core::ProductId;

    use super::*;

    fn sample_cart() -> Cart {
        Cart::from_items(vec![
            CartItem {
                id: ProductId::new(3),
                name: "Trail Runner Low".to_string(),
                price: Decimal::new(1399, 1),
                image: "https://cdn.example.com/3.jpg".to_string(),
                amount: 2,
            },
            CartItem {
                id: ProductId::new(1),
                name: "Court Classic".to_string(),
                price: Decimal::new(12500, 2),
                image: "https://cdn.example.com/1.jpg".to_string(),
                amount: 1,
            },
        ])
    }

    #[tokio::test]
    async fn load_missing_slot_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path().join("cart.json"));
        assert!(store.load().await.expect("load succeeds").is_none());
    }

    #[tokio::test]
    async fn save_then_load_reconstructs_identical_cart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path().join("cart.json"));
        let cart = sample_cart();

        store.save(&cart).await.expect("save succeeds");
        let restored = store.load().await.expect("load succeeds").expect("slot exists");

        assert_eq!(restored, cart);
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path().join("cart.json"));

        store.save(&sample_cart()).await.expect("save succeeds");
        let emptied = Cart::new();
        store.save(&emptied).await.expect("save succeeds");

        let restored = store.load().await.expect("load succeeds").expect("slot exists");
        assert!(restored.is_empty());
    }

    #[tokio::test]
    async fn corrupt_slot_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        tokio::fs::write(&path, "not json").await.expect("write succeeds");

        let store = FileSnapshotStore::new(path);
        let err = store.load().await.expect_err("corrupt slot should fail");
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[tokio::test]
    async fn unknown_envelope_version_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        let future = r#"{"version": 99, "saved_at": "2026-08-29T00:00:00Z", "items": []}"#;
        tokio::fs::write(&path, future).await.expect("write succeeds");

        let store = FileSnapshotStore::new(path);
        let err = store.load().await.expect_err("future version should fail");
        assert!(matches!(err, StorageError::UnsupportedVersion(99)));
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let store = FileSnapshotStore::new("/tmp/shoebox/cart.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/tmp/shoebox/cart.json.tmp")
        );
    }
}
