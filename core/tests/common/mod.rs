// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use kiyho::{CartManager, Catalog, MemoryStore, Product, ProductId};
use std::sync::Arc;
use tracing::Level;

// --- Fixture catalog ---
// Round prices keep the expected totals exact in f64.
pub const CLUTCH: u64 = 1; // 100
pub const TOTE: u64 = 2; // 50
pub const SATCHEL: u64 = 3; // 12.5

pub fn product(id: u64, brand: &str, name: &str, price: f64) -> Product {
  Product {
    id: ProductId::Int(id),
    brand: brand.to_string(),
    name: name.to_string(),
    price,
    description: format!("{} by {}", name, brand),
    image: format!("https://img.kiyho.test/{}.jpg", id),
  }
}

pub fn fixture_catalog() -> Arc<Catalog> {
  Arc::new(
    Catalog::new(vec![
      product(CLUTCH, "Luxury", "Velvet Clutch", 100.0),
      product(TOTE, "Casual", "Canvas Tote", 50.0),
      product(SATCHEL, "Budget", "Mini Satchel", 12.5),
    ])
    .expect("fixture catalog ids are unique"),
  )
}

pub fn id(n: u64) -> ProductId {
  ProductId::Int(n)
}

/// A manager over a fresh shared `MemoryStore`; the returned store clone sees every write.
pub fn fresh_cart() -> (CartManager<MemoryStore>, MemoryStore) {
  let store = MemoryStore::new();
  (CartManager::new(store.clone(), fixture_catalog()), store)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
