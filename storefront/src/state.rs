// storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use kiyho::{CartManager, Catalog, Checkout, FileStore, MockPaymentGateway};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Everything one command invocation works with: the page's "globals", made explicit.
pub struct AppState {
  pub config: AppConfig,
  pub catalog: Arc<Catalog>,
  pub cart: CartManager<FileStore>,
  pub checkout: Checkout<MockPaymentGateway>,
}

impl AppState {
  #[instrument(name = "AppState::load", skip_all, fields(store = %config.store_path.display()), err(Display))]
  pub fn load(config: AppConfig) -> Result<Self> {
    let catalog = Arc::new(match &config.catalog_path {
      Some(path) => {
        let raw = std::fs::read_to_string(path)
          .map_err(|e| AppError::Config(format!("Cannot read catalog '{}': {}", path.display(), e)))?;
        Catalog::from_json(&raw)?
      }
      None => Catalog::kiyho_collection(),
    });
    debug!(products = catalog.len(), "Catalog ready.");

    let cart = CartManager::restored(FileStore::open(&config.store_path), catalog.clone());
    debug!(lines = cart.len(), "Cart restored.");

    Ok(Self {
      config,
      catalog,
      cart,
      checkout: Checkout::new(MockPaymentGateway),
    })
  }
}
