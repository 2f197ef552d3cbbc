// kiyho/src/cart/mod.rs

//! The Cart Manager: an ordered list of cart lines kept in sync with a
//! `KeyValueStore`.
//!
//! Every mutating call runs to completion and writes the whole cart back to
//! the store under `CART_STORAGE_KEY` before returning. A failing write is
//! logged and leaves the in-memory cart as mutated; call `persist()` directly
//! to observe store errors.

mod line;

pub use line::{CartChange, CartLine};

use crate::catalog::{Catalog, ProductId};
use crate::error::KiyhoResult;
use crate::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Store key holding the JSON-encoded cart lines.
pub const CART_STORAGE_KEY: &str = "kiyho_cart";

pub struct CartManager<S: KeyValueStore> {
  store: S,
  catalog: Arc<Catalog>,
  lines: Vec<CartLine>,
}

impl<S: KeyValueStore> CartManager<S> {
  /// Creates a manager with an empty cart. Nothing is read from `store` until `restore`.
  pub fn new(store: S, catalog: Arc<Catalog>) -> Self {
    Self {
      store,
      catalog,
      lines: Vec::new(),
    }
  }

  /// `new` followed by `restore`: the usual startup path.
  pub fn restored(store: S, catalog: Arc<Catalog>) -> Self {
    let mut manager = Self::new(store, catalog);
    manager.restore();
    manager
  }

  /// Replaces the in-memory cart with the persisted one.
  ///
  /// Absent, unreadable or malformed data yields an empty cart; the fault is
  /// logged and never returned. Stored lines with quantity 0 are dropped and
  /// repeated ids are merged so the cart invariants hold after a restore.
  #[instrument(name = "CartManager::restore", skip_all)]
  pub fn restore(&mut self) {
    let raw = match self.store.get(CART_STORAGE_KEY) {
      Ok(Some(raw)) => raw,
      Ok(None) => {
        debug!("No persisted cart, starting empty.");
        self.lines.clear();
        return;
      }
      Err(e) => {
        warn!(error = %e, "Could not read persisted cart, starting empty.");
        self.lines.clear();
        return;
      }
    };

    match serde_json::from_str::<Vec<CartLine>>(&raw) {
      Ok(stored) => {
        self.lines = normalize(stored);
        debug!(lines = self.lines.len(), "Cart restored.");
      }
      Err(e) => {
        warn!(error = %e, "Persisted cart is malformed, discarding it.");
        self.lines.clear();
      }
    }
  }

  /// Adds one unit of `id`: bumps an existing line or appends a new one.
  pub fn add_item(&mut self, id: &ProductId) -> CartChange {
    let Some(product) = self.catalog.get(id) else {
      debug!(product_id = %id, "add_item: unknown product, ignoring.");
      return CartChange::UnknownProduct;
    };

    let change = match self.lines.iter_mut().find(|line| &line.id == id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(1);
        CartChange::Incremented { quantity: line.quantity }
      }
      None => {
        self.lines.push(CartLine::from_product(product));
        CartChange::Added
      }
    };
    debug!(product_id = %id, ?change, "add_item");
    self.persist_quietly();
    change
  }

  /// Deletes the line for `id`, if any.
  pub fn remove_item(&mut self, id: &ProductId) -> CartChange {
    let before = self.lines.len();
    self.lines.retain(|line| &line.id != id);
    // Persist even on a miss, matching the write-after-every-call contract.
    self.persist_quietly();
    if self.lines.len() == before {
      debug!(product_id = %id, "remove_item: not in cart.");
      CartChange::NotInCart
    } else {
      debug!(product_id = %id, "remove_item: removed.");
      CartChange::Removed
    }
  }

  /// Adds `delta` to the line's quantity; a result of zero or less removes the line.
  pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> CartChange {
    let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
      debug!(product_id = %id, delta, "update_quantity: not in cart.");
      return CartChange::NotInCart;
    };

    let next = i64::from(line.quantity).saturating_add(delta);
    if next <= 0 {
      debug!(product_id = %id, delta, "update_quantity: quantity reached zero, removing line.");
      return self.remove_item(id);
    }

    line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
    let change = CartChange::QuantityChanged { quantity: line.quantity };
    debug!(product_id = %id, delta, ?change, "update_quantity");
    self.persist_quietly();
    change
  }

  /// Empties the cart and persists the empty state.
  pub fn clear(&mut self) -> CartChange {
    self.lines.clear();
    self.persist_quietly();
    debug!("Cart cleared.");
    CartChange::Cleared
  }

  /// Logout hook. The cart does not survive the session that filled it.
  pub fn end_session(&mut self) -> CartChange {
    self.clear()
  }

  /// Σ price × quantity, unrounded.
  pub fn total_price(&self) -> f64 {
    self.lines.iter().map(CartLine::subtotal).sum()
  }

  /// Σ quantity.
  pub fn total_item_count(&self) -> u64 {
    self.lines.iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Writes the cart to the store as a JSON array.
  pub fn persist(&self) -> KiyhoResult<()> {
    let json = serde_json::to_string(&self.lines)?;
    self.store.set(CART_STORAGE_KEY, &json)
  }

  fn persist_quietly(&self) {
    if let Err(e) = self.persist() {
      error!(error = %e, "Failed to persist cart; in-memory cart kept.");
    }
  }

  /// Lines in insertion order.
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
    self.lines.iter().find(|line| &line.id == id)
  }

  pub fn contains(&self, id: &ProductId) -> bool {
    self.line(id).is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Number of distinct lines (not units; see `total_item_count`).
  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn store(&self) -> &S {
    &self.store
  }
}

fn normalize(stored: Vec<CartLine>) -> Vec<CartLine> {
  let mut positions: HashMap<ProductId, usize> = HashMap::new();
  let mut lines: Vec<CartLine> = Vec::with_capacity(stored.len());
  for line in stored {
    if line.quantity == 0 {
      warn!(product_id = %line.id, "Dropping persisted cart line with zero quantity.");
      continue;
    }
    match positions.get(&line.id) {
      Some(&pos) => {
        warn!(product_id = %line.id, "Merging repeated persisted cart line.");
        lines[pos].quantity = lines[pos].quantity.saturating_add(line.quantity);
      }
      None => {
        positions.insert(line.id.clone(), lines.len());
        lines.push(line);
      }
    }
  }
  lines
}
