// storefront/src/cli/handlers/cart_handlers.rs

use kiyho::{CartChange, ProductId};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::OutputFormat;
use crate::errors::Result;
use crate::render;
use crate::state::AppState;

pub(crate) fn cart_json(state: &AppState) -> serde_json::Value {
  json!({
    "lines": state.cart.lines(),
    "itemCount": state.cart.total_item_count(),
    "totalPrice": state.cart.total_price(),
  })
}

fn respond(state: &AppState, change: CartChange, id: &ProductId, format: OutputFormat) -> Result<String> {
  if change.is_noop() {
    warn!(product_id = %id, ?change, "Cart left unchanged.");
  } else {
    info!(product_id = %id, ?change, "Cart updated.");
  }

  let message = render::change(change, id);
  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
      "message": message,
      "changed": !change.is_noop(),
      "cart": cart_json(state),
    }))?),
    OutputFormat::Text => Ok(format!(
      "{}\n{}",
      message,
      render::cart(state.cart.lines(), state.cart.total_item_count(), state.cart.total_price())
    )),
  }
}

#[instrument(name = "handler::add_to_cart", skip(state, id, format), fields(product_id = %id))]
pub fn add_to_cart(state: &mut AppState, id: &ProductId, format: OutputFormat) -> Result<String> {
  let change = state.cart.add_item(id);
  respond(state, change, id, format)
}

#[instrument(name = "handler::remove_from_cart", skip(state, id, format), fields(product_id = %id))]
pub fn remove_from_cart(state: &mut AppState, id: &ProductId, format: OutputFormat) -> Result<String> {
  let change = state.cart.remove_item(id);
  respond(state, change, id, format)
}

#[instrument(name = "handler::update_quantity", skip(state, id, format), fields(product_id = %id))]
pub fn update_quantity(state: &mut AppState, id: &ProductId, delta: i64, format: OutputFormat) -> Result<String> {
  let change = state.cart.update_quantity(id, delta);
  respond(state, change, id, format)
}

pub fn view_cart(state: &AppState, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&cart_json(state))?),
    OutputFormat::Text => Ok(render::cart(
      state.cart.lines(),
      state.cart.total_item_count(),
      state.cart.total_price(),
    )),
  }
}

#[instrument(name = "handler::clear_cart", skip_all)]
pub fn clear_cart(state: &mut AppState, format: OutputFormat) -> Result<String> {
  state.cart.clear();
  // Persist explicitly so a failing store is reported rather than only logged.
  state.cart.persist()?;
  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&cart_json(state))?),
    OutputFormat::Text => Ok("Cart cleared.\n".to_string()),
  }
}
