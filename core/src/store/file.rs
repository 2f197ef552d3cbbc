// kiyho/src/store/file.rs

//! File-backed store: the whole keyspace lives in one JSON object,
//! `{"key": "value", ...}`, rewritten on every `set` / `remove`.

use super::KeyValueStore;
use crate::error::{KiyhoError, KiyhoResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStore {
  path: PathBuf,
  // Serializes read-modify-write cycles within this process.
  write_lock: Mutex<()>,
}

impl FileStore {
  /// Opens (lazily) the store at `path`. The file and its parent directory
  /// are created on the first write; a missing file reads as an empty store.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      write_lock: Mutex::new(()),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn io_error(key: &str, source: std::io::Error) -> KiyhoError {
    KiyhoError::StoreIo {
      key: key.to_string(),
      source,
    }
  }

  fn load(&self, key: &str) -> KiyhoResult<Entries> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        trace!(path = %self.path.display(), "Store file absent, reading as empty.");
        return Ok(Entries::new());
      }
      Err(e) => return Err(Self::io_error(key, e)),
    };
    if raw.trim().is_empty() {
      return Ok(Entries::new());
    }
    serde_json::from_str(&raw).map_err(|e| KiyhoError::StoreCorrupt {
      path: self.path.display().to_string(),
      message: e.to_string(),
    })
  }

  fn save(&self, key: &str, entries: &Entries) -> KiyhoResult<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| Self::io_error(key, e))?;
    }
    let body = serde_json::to_string_pretty(entries)?;
    let mut tmp = self.path.clone().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, body).map_err(|e| Self::io_error(key, e))?;
    fs::rename(&tmp, &self.path).map_err(|e| Self::io_error(key, e))?;
    debug!(path = %self.path.display(), entries = entries.len(), "Store file written.");
    Ok(())
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> KiyhoResult<Option<String>> {
    Ok(self.load(key)?.remove(key))
  }

  #[instrument(name = "FileStore::set", skip(self, value), fields(path = %self.path.display(), len = value.len()), err(Display))]
  fn set(&self, key: &str, value: &str) -> KiyhoResult<()> {
    let _guard = self.write_lock.lock();
    let mut entries = self.load(key)?;
    entries.insert(key.to_string(), value.to_string());
    self.save(key, &entries)
  }

  #[instrument(name = "FileStore::remove", skip(self), fields(path = %self.path.display()), err(Display))]
  fn remove(&self, key: &str) -> KiyhoResult<()> {
    let _guard = self.write_lock.lock();
    let mut entries = self.load(key)?;
    if entries.remove(key).is_some() {
      self.save(key, &entries)?;
    }
    Ok(())
  }
}
