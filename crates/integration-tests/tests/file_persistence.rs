//! End-to-end persistence through the file-backed snapshot slot.

use shoebox_cart::{CartStore, FileSnapshotStore, StorageError};
use shoebox_core::ProductId;

use shoebox_integration_tests::{FakeCatalog, RecordingNotifier, product};

fn catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_product(product(1, "Court Classic", "125.00"), 10)
        .with_product(product(2, "Slip-On Canvas", "59.90"), 5)
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    let catalog = catalog();

    let store = CartStore::open(
        catalog.clone(),
        FileSnapshotStore::new(&path),
        RecordingNotifier::new(),
    )
    .await
    .expect("open store");

    store.add_item(ProductId::new(1)).await.expect("add");
    store.add_item(ProductId::new(2)).await.expect("add");
    store.add_item(ProductId::new(2)).await.expect("add");
    let before = store.items().await;
    drop(store);

    let reopened = CartStore::open(
        catalog,
        FileSnapshotStore::new(&path),
        RecordingNotifier::new(),
    )
    .await
    .expect("reopen store");

    assert_eq!(reopened.items().await, before);
}

#[tokio::test]
async fn corrupt_slot_fails_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    tokio::fs::write(&path, "{").await.expect("write");

    let err = CartStore::open(
        catalog(),
        FileSnapshotStore::new(&path),
        RecordingNotifier::new(),
    )
    .await
    .expect_err("corrupt slot");

    assert!(matches!(err, StorageError::Corrupt(_)));
}
