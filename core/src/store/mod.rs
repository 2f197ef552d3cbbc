// kiyho/src/store/mod.rs

//! The persistent key-value store the cart writes through to.
//!
//! The contract mirrors browser local storage: string keys, string values,
//! synchronous `get` / `set` / `remove`. Two backends are provided:
//!  - `MemoryStore`: a cloneable in-process handle, shared between clones.
//!  - `FileStore`: a JSON object file on disk that outlives the process.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::KiyhoResult;

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
  /// Returns the value stored under `key`, or `None` if absent.
  fn get(&self, key: &str) -> KiyhoResult<Option<String>>;

  /// Stores `value` under `key`, replacing any previous value.
  fn set(&self, key: &str, value: &str) -> KiyhoResult<()>;

  /// Deletes `key`. Removing an absent key is not an error.
  fn remove(&self, key: &str) -> KiyhoResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
  fn get(&self, key: &str) -> KiyhoResult<Option<String>> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> KiyhoResult<()> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> KiyhoResult<()> {
    (**self).remove(key)
  }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
  fn get(&self, key: &str) -> KiyhoResult<Option<String>> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> KiyhoResult<()> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> KiyhoResult<()> {
    (**self).remove(key)
  }
}
