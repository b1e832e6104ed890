//! Key-value storage and the cart snapshot bridge on top of it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `KeyValueStore` mirrors the browser Storage API so the cart store can be
//! backed by `localStorage` in the page and by `MemoryStorage` everywhere else.
//! `CartPersistence` owns the storage key and the snapshot encoding.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write leaves the in-memory cart
//! authoritative and is only logged; a malformed snapshot is discarded and the
//! cart starts empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use log::{debug, warn};

use crate::error::StoreError;
use crate::state::cart::{CartItem, CartState, PersistCommand};

/// String-keyed durable storage with whole-value replacement.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, looked up on every call.
///
/// Outside the browser every operation reports [`StoreError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StoreError::Storage(format!("{e:?}")))?
        .ok_or(StoreError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StoreError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// In-process store used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry. Seeding is not counted as a write.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of `set_item` + `remove_item` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serialize cart entries into a storage snapshot.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode_snapshot(items: &[CartItem]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(StoreError::Encode)
}

/// Parse a storage snapshot into cart entries.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if `raw` is not a JSON array of cart items.
pub fn decode_snapshot(raw: &str) -> Result<Vec<CartItem>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Decode)
}

/// Binds the cart to one storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartPersistence {
    key: String,
}

impl CartPersistence {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot once. Absent, unreadable, or malformed data
    /// all yield an empty cart.
    pub fn restore<S: KeyValueStore + ?Sized>(&self, store: &S) -> CartState {
        let raw = match store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CartState::default(),
            Err(e) => {
                warn!("cart restore skipped ({}): {e}", self.key);
                return CartState::default();
            }
        };
        match decode_snapshot(&raw) {
            Ok(snapshot) => CartState::from_snapshot(snapshot),
            Err(e) => {
                warn!("discarding malformed cart snapshot ({}): {e}", self.key);
                CartState::default()
            }
        }
    }

    /// Carry out `command` against `store`. Failures are logged, not returned.
    pub fn execute<S: KeyValueStore + ?Sized>(&self, store: &S, command: &PersistCommand) {
        let result = match command {
            PersistCommand::Write(items) => {
                debug!("writing cart snapshot ({} entries)", items.len());
                encode_snapshot(items).and_then(|raw| store.set_item(&self.key, &raw))
            }
            PersistCommand::Remove => {
                debug!("removing cart snapshot");
                store.remove_item(&self.key)
            }
        };
        if let Err(e) = result {
            warn!("cart persistence failed ({}): {e}", self.key);
        }
    }
}
