// kiyho/src/store/memory.rs
use super::KeyValueStore;
use crate::error::KiyhoResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory store with shared ownership.
///
/// Clones point at the same map, so a caller can hand one clone to a
/// `CartManager` and keep another to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Arc<RwLock<HashMap<String, String>>>);

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-seeds `key` with `value`, e.g. a cart left behind by a previous session.
  pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.0.write().insert(key.into(), value.into());
    self
  }

  pub fn len(&self) -> usize {
    self.0.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.read().is_empty()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> KiyhoResult<Option<String>> {
    Ok(self.0.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> KiyhoResult<()> {
    self.0.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> KiyhoResult<()> {
    self.0.write().remove(key);
    Ok(())
  }
}
