// kiyho/src/catalog/mod.rs

//! The static product catalog.
//!
//! A `Catalog` is built once at startup (either the built-in collection or a
//! JSON file) and never mutated afterwards. The cart only reads from it via
//! identifier lookup; listing and filtering exist for the presentation layer.

mod collection;
mod product;

pub use product::{Product, ProductId};

use crate::error::{KiyhoError, KiyhoResult};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Brand/category and name-search criteria for `Catalog::filter`.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
  /// `None` means "All".
  pub brand: Option<String>,
  /// Case-insensitive substring of the product name. Empty matches everything.
  pub search: String,
}

impl ProductFilter {
  pub fn brand(mut self, brand: impl Into<String>) -> Self {
    self.brand = Some(brand.into());
    self
  }

  pub fn search(mut self, term: impl Into<String>) -> Self {
    self.search = term.into();
    self
  }

  fn matches(&self, product: &Product, needle: &str) -> bool {
    let brand_ok = self.brand.as_deref().map_or(true, |b| product.brand == b);
    brand_ok && product.name.to_lowercase().contains(needle)
  }
}

/// Ordered, immutable list of products with an id index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  products: Vec<Product>,
  index: HashMap<ProductId, usize>,
}

impl Catalog {
  /// Builds a catalog, rejecting duplicate identifiers and negative or non-finite prices.
  pub fn new(products: Vec<Product>) -> KiyhoResult<Self> {
    let mut index = HashMap::with_capacity(products.len());
    for (pos, product) in products.iter().enumerate() {
      if !product.price.is_finite() || product.price < 0.0 {
        return Err(KiyhoError::InvalidProduct {
          id: product.id.clone(),
          reason: format!("price {} must be a finite, non-negative amount", product.price),
        });
      }
      if index.insert(product.id.clone(), pos).is_some() {
        return Err(KiyhoError::DuplicateProduct { id: product.id.clone() });
      }
    }
    debug!(products = products.len(), "Catalog built.");
    Ok(Self { products, index })
  }

  /// Parses a JSON array of products.
  #[instrument(name = "Catalog::from_json", skip_all, err(Display))]
  pub fn from_json(json: &str) -> KiyhoResult<Self> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Self::new(products)
  }

  /// The six-bag Kiyho house collection.
  pub fn kiyho_collection() -> Self {
    // Ids are 1..=6 by construction, so the index build cannot fail.
    let products = collection::house_collection();
    let index = products
      .iter()
      .enumerate()
      .map(|(pos, p)| (p.id.clone(), pos))
      .collect();
    Self { products, index }
  }

  pub fn get(&self, id: &ProductId) -> Option<&Product> {
    self.index.get(id).map(|&pos| &self.products[pos])
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// Distinct brand labels, in first-seen catalog order.
  pub fn brands(&self) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in &self.products {
      if !seen.contains(&product.brand.as_str()) {
        seen.push(&product.brand);
      }
    }
    seen
  }

  /// Products matching `filter`, in catalog order.
  pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
    let needle = filter.search.to_lowercase();
    self.products.iter().filter(|p| filter.matches(p, &needle)).collect()
  }
}
