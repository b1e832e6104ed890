use super::*;
use crate::net::types::Product;

const KEY: &str = "cart-test";

fn product(id: u64, price: f64) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        price,
        image: format!("https://img.test/{id}.png"),
        category: "electronics".to_owned(),
    }
}

fn item(id: u64, price: f64, qty: u32) -> CartItem {
    CartItem { product: product(id, price), qty }
}

/// Rejects every write; reads succeed with nothing stored.
struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Storage("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Storage("SecurityError".to_owned()))
    }
}

// =============================================================
// Snapshot encoding
// =============================================================

#[test]
fn snapshot_entries_are_flat_product_records_with_qty() {
    let raw = encode_snapshot(&[item(4, 15.99, 2)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 4,
            "title": "Product 4",
            "price": 15.99,
            "image": "https://img.test/4.png",
            "category": "electronics",
            "qty": 2
        }])
    );
}

#[test]
fn decode_snapshot_reads_previously_stored_format() {
    let raw = r#"[{"id":9,"title":"SSD","price":109,"image":"x","category":"electronics","qty":3}]"#;
    let items = decode_snapshot(raw).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.id, 9);
    assert_eq!(items[0].qty, 3);
}

#[test]
fn decode_snapshot_rejects_non_json() {
    assert!(matches!(decode_snapshot("not json"), Err(StoreError::Decode(_))));
}

// =============================================================
// CartPersistence::restore
// =============================================================

#[test]
fn restore_absent_key_yields_empty_cart() {
    let store = MemoryStorage::new();
    let state = CartPersistence::new(KEY).restore(&store);
    assert!(state.is_empty());
}

#[test]
fn restore_round_trips_written_snapshot() {
    let store = MemoryStorage::new();
    let persistence = CartPersistence::new(KEY);
    let items = vec![item(1, 9.99, 2), item(2, 5.0, 1)];
    persistence.execute(&store, &PersistCommand::Write(items.clone()));

    let state = persistence.restore(&store);
    assert_eq!(state.items(), items.as_slice());
}

#[test]
fn restore_malformed_snapshot_starts_empty() {
    let store = MemoryStorage::with_item(KEY, "{oops");
    let state = CartPersistence::new(KEY).restore(&store);
    assert!(state.is_empty());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn restore_wrong_shape_starts_empty() {
    let store = MemoryStorage::with_item(KEY, r#"{"id":1}"#);
    assert!(CartPersistence::new(KEY).restore(&store).is_empty());
}

#[test]
fn restore_does_not_write() {
    let raw = encode_snapshot(&[item(1, 9.99, 1)]).unwrap();
    let store = MemoryStorage::with_item(KEY, &raw);
    let state = CartPersistence::new(KEY).restore(&store);
    assert_eq!(state.total_count(), 1);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn restore_repairs_duplicate_ids_and_zero_quantities() {
    let raw = encode_snapshot(&[item(1, 9.99, 1), item(2, 5.0, 0), item(1, 8.99, 2)]).unwrap();
    let store = MemoryStorage::with_item(KEY, &raw);
    let state = CartPersistence::new(KEY).restore(&store);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].qty, 3);
    assert_eq!(state.items()[0].product.price, 8.99);
}

#[test]
fn restore_ignores_other_keys() {
    let raw = encode_snapshot(&[item(1, 9.99, 1)]).unwrap();
    let store = MemoryStorage::with_item("someone-else", &raw);
    assert!(CartPersistence::new(KEY).restore(&store).is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn restore_from_browser_storage_outside_browser_is_empty() {
    assert!(CartPersistence::new(KEY).restore(&BrowserStorage).is_empty());
}

// =============================================================
// CartPersistence::execute
// =============================================================

#[test]
fn execute_remove_deletes_key() {
    let store = MemoryStorage::new();
    let persistence = CartPersistence::new(KEY);
    persistence.execute(&store, &PersistCommand::Write(vec![item(1, 1.0, 1)]));
    assert!(store.contains(KEY));

    persistence.execute(&store, &PersistCommand::Remove);
    assert!(!store.contains(KEY));
    assert_eq!(store.get_item(KEY).unwrap(), None);
}

#[test]
fn execute_swallows_storage_failures() {
    let persistence = CartPersistence::new(KEY);
    persistence.execute(&ReadOnlyStorage, &PersistCommand::Write(vec![item(1, 1.0, 1)]));
    persistence.execute(&ReadOnlyStorage, &PersistCommand::Remove);
}

#[test]
fn persistence_reports_its_key() {
    assert_eq!(CartPersistence::new("keranjangRifaNext").key(), "keranjangRifaNext");
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_counts_writes_and_removes() {
    let store = MemoryStorage::new();
    store.set_item("a", "1").unwrap();
    store.set_item("a", "2").unwrap();
    store.remove_item("missing").unwrap();
    assert_eq!(store.write_count(), 3);
    assert_eq!(store.get_item("a").unwrap().as_deref(), Some("2"));
}
