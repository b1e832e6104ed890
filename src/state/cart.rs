//! Shopping cart state and its persistence-aware store.
//!
//! DESIGN
//! ======
//! `CartState::apply` is a pure reducer over `{Add, Clear}`. It never touches
//! storage; instead it returns the [`PersistCommand`] the transition implies.
//! `CartStore` runs the reducer and then executes that command exactly once,
//! so every mutation has a single write path.
//!
//! INVARIANTS
//! ==========
//! At most one entry per product id, and `qty >= 1` for every entry.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Product;
use crate::util::storage::{CartPersistence, KeyValueStore};

/// A product in the cart with its quantity.
///
/// Serialized flat, so a snapshot entry is the product record plus `qty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub qty: u32,
}

impl CartItem {
    /// `price * qty` for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}

/// Cart mutations triggered by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    Add(Product),
    Clear,
}

/// Storage side effect implied by a cart transition.
#[derive(Clone, Debug, PartialEq)]
pub enum PersistCommand {
    /// Replace the stored snapshot with these items.
    Write(Vec<CartItem>),
    /// Delete the stored snapshot.
    Remove,
}

/// Ordered cart entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Build a cart from a decoded snapshot, repairing it if needed.
    ///
    /// Entries with `qty == 0` are dropped and repeated ids are merged into the
    /// first occurrence (quantities summed, latest fields kept).
    pub fn from_snapshot(snapshot: Vec<CartItem>) -> Self {
        let mut state = Self::default();
        for entry in snapshot.into_iter().filter(|entry| entry.qty > 0) {
            match state.position(entry.product.id) {
                Some(idx) => {
                    let existing = &mut state.items[idx];
                    existing.qty = existing.qty.saturating_add(entry.qty);
                    existing.product = entry.product;
                }
                None => state.items.push(entry),
            }
        }
        state
    }

    /// Apply `action` and return the storage command it implies.
    pub fn apply(&mut self, action: CartAction) -> PersistCommand {
        match action {
            CartAction::Add(product) => {
                self.add(product);
                PersistCommand::Write(self.items.clone())
            }
            CartAction::Clear => {
                self.items.clear();
                PersistCommand::Remove
            }
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * qty` over all entries.
    pub fn total_amount(&self) -> f64 {
        // Folding from +0.0: `Sum` starts at -0.0, which formats as "-0.00".
        self.items.iter().fold(0.0, |acc, item| acc + item.line_total())
    }

    /// Sum of `qty` over all entries.
    pub fn total_count(&self) -> u32 {
        self.items.iter().fold(0, |acc, item| acc.saturating_add(item.qty))
    }

    // A repeat add takes the incoming product fields, not just the bumped qty.
    fn add(&mut self, product: Product) {
        match self.position(product.id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.qty = existing.qty.saturating_add(1);
                existing.product = product;
            }
            None => self.items.push(CartItem { product, qty: 1 }),
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == id)
    }
}

/// The authoritative cart, bound to the storage it is mirrored into.
#[derive(Clone, Debug)]
pub struct CartStore<S> {
    state: CartState,
    persistence: CartPersistence,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate the cart from `storage`. Reading never writes back.
    pub fn open(storage: S, persistence: CartPersistence) -> Self {
        let state = persistence.restore(&storage);
        Self { state, persistence, storage }
    }

    /// Run `action` through the reducer and persist the result.
    pub fn dispatch(&mut self, action: CartAction) {
        let command = self.state.apply(action);
        self.persistence.execute(&self.storage, &command);
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.dispatch(CartAction::Add(product));
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
