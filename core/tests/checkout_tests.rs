// tests/checkout_tests.rs
mod common;

use common::*;
use kiyho::{
  Checkout, CheckoutError, KeyValueStore, MockPaymentGateway, OrderSummary, PaymentConfirmation, PaymentGateway,
  PaymentMethod, CART_STORAGE_KEY,
};
use uuid::Uuid;

#[test]
fn test_summary_charges_shipping_at_or_below_threshold() {
  let summary = OrderSummary::from_subtotal(200.0);
  assert_eq!(summary.shipping, 25.0);
  assert_eq!(summary.tax, 16.0);
  assert_eq!(summary.total, 241.0);
  assert_eq!(summary.free_shipping_remaining(), Some(0.0));

  let small = OrderSummary::from_subtotal(50.0);
  assert_eq!(small.free_shipping_remaining(), Some(150.0));
}

#[test]
fn test_summary_ships_free_above_threshold() {
  let summary = OrderSummary::from_subtotal(250.0);
  assert!(summary.ships_free());
  assert_eq!(summary.tax, 20.0);
  assert_eq!(summary.total, 270.0);
  assert_eq!(summary.free_shipping_remaining(), None);
}

#[test]
fn test_payment_method_parsing() {
  assert_eq!("credit-card".parse::<PaymentMethod>().unwrap(), PaymentMethod::CreditCard);
  assert_eq!(" PayPal ".parse::<PaymentMethod>().unwrap(), PaymentMethod::PayPal);
  assert_eq!("esewa".parse::<PaymentMethod>().unwrap(), PaymentMethod::Esewa);
  assert!("cash".parse::<PaymentMethod>().is_err());
  assert_eq!(serde_json::to_string(&PaymentMethod::PayPal).unwrap(), "\"paypal\"");
  assert_eq!(serde_json::to_string(&PaymentMethod::CreditCard).unwrap(), "\"credit-card\"");
}

#[test]
fn test_checkout_requires_payment_method_first() {
  setup_tracing();
  let (mut cart, _store) = fresh_cart();
  let checkout = Checkout::new(MockPaymentGateway);

  // Even an empty cart reports the missing payment method first.
  let err = checkout.complete(&mut cart, None).unwrap_err();
  assert!(matches!(err, CheckoutError::PaymentMethodRequired));

  cart.add_item(&id(TOTE));
  let err = checkout.complete(&mut cart, None).unwrap_err();
  assert!(matches!(err, CheckoutError::PaymentMethodRequired));
  assert_eq!(cart.total_item_count(), 1);
}

#[test]
fn test_checkout_refuses_empty_cart() {
  setup_tracing();
  let (mut cart, _store) = fresh_cart();
  let err = Checkout::new(MockPaymentGateway)
    .complete(&mut cart, Some(PaymentMethod::Esewa))
    .unwrap_err();
  assert!(matches!(err, CheckoutError::EmptyCart));
}

#[test]
fn test_checkout_builds_receipt_and_clears_cart() {
  setup_tracing();
  let (mut cart, store) = fresh_cart();
  cart.add_item(&id(CLUTCH));
  cart.add_item(&id(TOTE));
  cart.add_item(&id(CLUTCH));

  let receipt = Checkout::new(MockPaymentGateway)
    .complete(&mut cart, Some(PaymentMethod::CreditCard))
    .unwrap();

  assert_eq!(receipt.lines.len(), 2);
  assert_eq!(receipt.item_count(), 3);
  assert_eq!(receipt.summary, OrderSummary::from_subtotal(250.0));
  assert_eq!(receipt.payment.amount, 270.0);
  assert_eq!(receipt.payment.method, PaymentMethod::CreditCard);
  assert!(receipt.payment.reference.starts_with("mock_pay_"));

  assert!(cart.is_empty());
  assert_eq!(store.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
  fn charge(&self, _order_id: Uuid, _amount: f64, _method: PaymentMethod) -> anyhow::Result<PaymentConfirmation> {
    anyhow::bail!("card expired")
  }
}

#[test]
fn test_declined_payment_keeps_cart() {
  setup_tracing();
  let (mut cart, _store) = fresh_cart();
  cart.add_item(&id(SATCHEL));

  let err = Checkout::new(DecliningGateway)
    .complete(&mut cart, Some(PaymentMethod::PayPal))
    .unwrap_err();
  match err {
    CheckoutError::PaymentDeclined { source } => assert_eq!(source.to_string(), "card expired"),
    other => panic!("Expected PaymentDeclined, got {:?}", other),
  }
  assert_eq!(cart.total_item_count(), 1);
}

#[test]
fn test_mock_gateway_rejects_zero_amount() {
  let err = MockPaymentGateway
    .charge(Uuid::new_v4(), 0.0, PaymentMethod::Esewa)
    .unwrap_err();
  assert!(err.to_string().contains("greater than zero"));
}
