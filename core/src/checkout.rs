// kiyho/src/checkout.rs

//! Order summary pricing and checkout completion.
//!
//! Checkout is the only place the cart is cleared as a side effect of another
//! operation: once payment succeeds, a `Receipt` is built from the current
//! lines and the cart is emptied.

use crate::cart::{CartLine, CartManager};
use crate::error::{CheckoutError, KiyhoError, KiyhoResult};
use crate::store::KeyValueStore;
use anyhow::{bail, Result as AnyResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Subtotals strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 200.0;
/// Flat shipping charge below the threshold.
pub const FLAT_SHIPPING: f64 = 25.0;
/// Sales tax applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Subtotal, shipping, tax and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
  pub subtotal: f64,
  pub shipping: f64,
  pub tax: f64,
  pub total: f64,
}

impl OrderSummary {
  pub fn from_subtotal(subtotal: f64) -> Self {
    let shipping = if subtotal > FREE_SHIPPING_THRESHOLD { 0.0 } else { FLAT_SHIPPING };
    let tax = subtotal * TAX_RATE;
    Self {
      subtotal,
      shipping,
      tax,
      total: subtotal + shipping + tax,
    }
  }

  pub fn for_cart<S: KeyValueStore>(cart: &CartManager<S>) -> Self {
    Self::from_subtotal(cart.total_price())
  }

  pub fn ships_free(&self) -> bool {
    self.shipping == 0.0
  }

  /// How much more the customer must spend for free shipping, if shipping is charged.
  pub fn free_shipping_remaining(&self) -> Option<f64> {
    if self.ships_free() {
      None
    } else {
      Some(FREE_SHIPPING_THRESHOLD - self.subtotal)
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
  CreditCard,
  #[serde(rename = "paypal")]
  PayPal,
  Esewa,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 3] = [PaymentMethod::CreditCard, PaymentMethod::PayPal, PaymentMethod::Esewa];

  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::CreditCard => "credit-card",
      PaymentMethod::PayPal => "paypal",
      PaymentMethod::Esewa => "esewa",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PaymentMethod::CreditCard => "Credit Card",
      PaymentMethod::PayPal => "PayPal",
      PaymentMethod::Esewa => "eSewa (Nepal)",
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentMethod {
  type Err = KiyhoError;

  fn from_str(s: &str) -> KiyhoResult<Self> {
    let wanted = s.trim().to_ascii_lowercase();
    PaymentMethod::ALL
      .into_iter()
      .find(|m| m.as_str() == wanted)
      .ok_or_else(|| KiyhoError::InvalidPaymentMethod(s.to_string()))
  }
}

/// Gateway acknowledgement of a successful charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
  pub reference: String,
  pub amount: f64,
  pub method: PaymentMethod,
}

/// Something that can take money. The storefront only ships a mock.
pub trait PaymentGateway {
  fn charge(&self, order_id: Uuid, amount: f64, method: PaymentMethod) -> AnyResult<PaymentConfirmation>;
}

/// Approves every positive amount; refuses zero, negative and non-finite ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentGateway;

impl PaymentGateway for MockPaymentGateway {
  #[instrument(name = "MockPaymentGateway::charge", skip(self), err(Display))]
  fn charge(&self, order_id: Uuid, amount: f64, method: PaymentMethod) -> AnyResult<PaymentConfirmation> {
    if !amount.is_finite() || amount <= 0.0 {
      bail!("amount must be greater than zero, got {}", amount);
    }
    let reference = format!("mock_pay_{}", Uuid::new_v4().simple());
    info!(%reference, "Mock payment approved.");
    Ok(PaymentConfirmation {
      reference,
      amount,
      method,
    })
  }
}

/// Everything the thank-you page needs after a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
  pub order_id: Uuid,
  pub placed_at: DateTime<Utc>,
  pub lines: Vec<CartLine>,
  pub summary: OrderSummary,
  pub payment: PaymentConfirmation,
}

impl Receipt {
  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| u64::from(l.quantity)).sum()
  }
}

/// Runs checkouts against a payment gateway.
#[derive(Debug, Clone, Default)]
pub struct Checkout<G: PaymentGateway = MockPaymentGateway> {
  gateway: G,
}

impl<G: PaymentGateway> Checkout<G> {
  pub fn new(gateway: G) -> Self {
    Self { gateway }
  }

  /// Charges the cart total and clears the cart.
  ///
  /// Preconditions are checked in order: payment method, then a non-empty
  /// cart. On any error the cart is not modified.
  #[instrument(name = "Checkout::complete", skip(self, cart), fields(lines = cart.len()), err(Display))]
  pub fn complete<S: KeyValueStore>(
    &self,
    cart: &mut CartManager<S>,
    method: Option<PaymentMethod>,
  ) -> Result<Receipt, CheckoutError> {
    let method = method.ok_or(CheckoutError::PaymentMethodRequired)?;
    if cart.is_empty() {
      return Err(CheckoutError::EmptyCart);
    }

    let summary = OrderSummary::for_cart(cart);
    let order_id = Uuid::new_v4();
    let payment = self.gateway.charge(order_id, summary.total, method).map_err(|source| {
      warn!(%order_id, error = %source, "Payment declined, cart kept.");
      CheckoutError::PaymentDeclined { source }
    })?;

    let receipt = Receipt {
      order_id,
      placed_at: Utc::now(),
      lines: cart.lines().to_vec(),
      summary,
      payment,
    };
    cart.clear();
    info!(%order_id, total = receipt.summary.total, "Checkout completed.");
    Ok(receipt)
  }
}
