// storefront/src/cli/handlers/checkout_handlers.rs

use kiyho::{KiyhoError, OrderSummary, PaymentMethod};
use serde_json::json;
use tracing::{info, instrument};

use super::OutputFormat;
use crate::errors::{AppError, Result};
use crate::render;
use crate::state::AppState;

pub fn order_summary(state: &AppState, format: OutputFormat) -> Result<String> {
  let summary = OrderSummary::for_cart(&state.cart);
  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
      "summary": summary,
      "freeShippingRemaining": summary.free_shipping_remaining(),
    }))?),
    OutputFormat::Text => Ok(render::summary(&summary)),
  }
}

fn parse_payment(payment: Option<&str>) -> Result<Option<PaymentMethod>> {
  payment
    .map(|raw| {
      raw.parse::<PaymentMethod>().map_err(|e| {
        if matches!(e, KiyhoError::InvalidPaymentMethod(_)) {
          AppError::Validation(e.to_string())
        } else {
          AppError::from(e)
        }
      })
    })
    .transpose()
}

#[instrument(name = "handler::checkout", skip(state, format))]
pub fn checkout(state: &mut AppState, payment: Option<&str>, format: OutputFormat) -> Result<String> {
  let method = parse_payment(payment)?;
  let receipt = state.checkout.complete(&mut state.cart, method)?;
  info!(order_id = %receipt.order_id, "Order placed.");

  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&receipt)?),
    OutputFormat::Text => Ok(render::receipt(&receipt)),
  }
}
