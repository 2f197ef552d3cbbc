// kiyho/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Error)]
pub enum KiyhoError {
  #[error("Store I/O failed for key '{key}'. Source: {source}")]
  StoreIo {
    key: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Store at '{path}' is corrupt: {message}")]
  StoreCorrupt { path: String, message: String },

  #[error("Serialization failed: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Catalog contains product id {id} more than once")]
  DuplicateProduct { id: ProductId },

  #[error("Unknown payment method '{0}' (expected credit-card, paypal or esewa)")]
  InvalidPaymentMethod(String),

  #[error("Catalog product {id} is invalid: {reason}")]
  InvalidProduct { id: ProductId, reason: String },
}

/// Reasons a checkout attempt is refused. The cart is left untouched in every case.
#[derive(Debug, Error)]
pub enum CheckoutError {
  #[error("Payment method required: please select a payment method to continue")]
  PaymentMethodRequired,

  #[error("Cart is empty: please add items to your cart before checking out")]
  EmptyCart,

  #[error("Payment declined. Source: {source}")]
  PaymentDeclined {
    #[source]
    source: AnyhowError,
  },
}

pub type KiyhoResult<T, E = KiyhoError> = std::result::Result<T, E>;
