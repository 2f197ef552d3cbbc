// kiyho/src/catalog/product.rs

//! Catalog entry types: `ProductId` and `Product`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog product.
///
/// Stored catalogs use either integers (`1`) or strings (`"lux-1"`), so the
/// id serializes untagged and both forms round-trip unchanged. The two forms
/// never compare equal: `Int(1)` is not `Text("1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
  Int(u64),
  Text(String),
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductId::Int(n) => write!(f, "{}", n),
      ProductId::Text(s) => f.write_str(s),
    }
  }
}

impl From<u64> for ProductId {
  fn from(n: u64) -> Self {
    ProductId::Int(n)
  }
}

impl From<&str> for ProductId {
  fn from(s: &str) -> Self {
    ProductId::Text(s.to_string())
  }
}

impl From<String> for ProductId {
  fn from(s: String) -> Self {
    ProductId::Text(s)
  }
}

/// Parses user input: all-digit input becomes `Int`, anything else `Text`.
impl FromStr for ProductId {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    Ok(match trimmed.parse::<u64>() {
      Ok(n) => ProductId::Int(n),
      Err(_) => ProductId::Text(trimmed.to_string()),
    })
  }
}

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  /// Brand or category label. Catalog files from the single-page variant call it `category`.
  #[serde(alias = "category")]
  pub brand: String,
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub image: String,
}

impl Product {
  /// "Brand Name", the label carts and order summaries show.
  pub fn display_name(&self) -> String {
    format!("{} {}", self.brand, self.name)
  }
}
