// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = ".kiyho/storage.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// JSON file standing in for browser local storage.
  pub store_path: PathBuf,
  /// Optional JSON catalog replacing the built-in collection.
  pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| -> Result<Option<String>> {
      match env::var(var_name) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("Invalid environment variable '{}': {}", var_name, e))),
      }
    };

    let store_path = get_env("KIYHO_STORE_PATH")?
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
    let catalog_path = get_env("KIYHO_CATALOG_PATH")?.map(PathBuf::from);

    tracing::debug!(store_path = %store_path.display(), catalog_path = ?catalog_path, "Configuration loaded.");

    Ok(Self {
      store_path,
      catalog_path,
    })
  }

  /// Command-line flags win over the environment.
  pub fn with_overrides(mut self, store: Option<PathBuf>, catalog: Option<PathBuf>) -> Self {
    if let Some(store) = store {
      self.store_path = store;
    }
    if catalog.is_some() {
      self.catalog_path = catalog;
    }
    self
  }
}
