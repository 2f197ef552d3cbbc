// kiyho/src/cart/line.rs
use crate::catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product in the cart with its quantity.
///
/// Display fields are copied from the catalog when the line is created so the
/// cart renders without re-joining the catalog. `quantity` is never zero while
/// the line is held by a `CartManager`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  pub id: ProductId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub brand: Option<String>,
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub image: String,
  pub quantity: u32,
}

impl CartLine {
  pub(crate) fn from_product(product: &Product) -> Self {
    Self {
      id: product.id.clone(),
      brand: Some(product.brand.clone()),
      name: product.name.clone(),
      price: product.price,
      image: product.image.clone(),
      quantity: 1,
    }
  }

  /// `price * quantity`.
  pub fn subtotal(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }

  pub fn display_name(&self) -> String {
    match &self.brand {
      Some(brand) => format!("{} {}", brand, self.name),
      None => self.name.clone(),
    }
  }
}

/// What a cart mutation did.
///
/// Unknown ids are not errors: the operation is a no-op and reports
/// `UnknownProduct` / `NotInCart` for callers that want to tell the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
  /// A new line was appended with quantity 1.
  Added,
  /// An existing line's quantity went up by one through `add_item`.
  Incremented { quantity: u32 },
  /// `update_quantity` left the line in place with this quantity.
  QuantityChanged { quantity: u32 },
  /// The line is gone, either explicitly or because its quantity reached zero.
  Removed,
  Cleared,
  /// `add_item` with an id the catalog does not know.
  UnknownProduct,
  /// `remove_item` / `update_quantity` with an id that has no line.
  NotInCart,
}

impl CartChange {
  /// True when the cart was left exactly as it was.
  pub fn is_noop(&self) -> bool {
    matches!(self, CartChange::UnknownProduct | CartChange::NotInCart)
  }
}
