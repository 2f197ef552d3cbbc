// storefront/src/cli/handlers/catalog_handlers.rs

use kiyho::{ProductFilter, ProductId};
use tracing::{debug, instrument};

use super::OutputFormat;
use crate::errors::{AppError, Result};
use crate::render;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(state, format))]
pub fn list_products(state: &AppState, brand: Option<String>, search: String, format: OutputFormat) -> Result<String> {
  let filter = ProductFilter { brand, search };
  let products = state.catalog.filter(&filter);
  debug!(matched = products.len(), "Products filtered.");

  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(&products)?),
    OutputFormat::Text => Ok(render::product_list(&products)),
  }
}

#[instrument(name = "handler::show_product", skip(state, id, format), fields(product_id = %id))]
pub fn show_product(state: &AppState, id: &ProductId, format: OutputFormat) -> Result<String> {
  let product = state
    .catalog
    .get(id)
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))?;

  match format {
    OutputFormat::Json => Ok(serde_json::to_string_pretty(product)?),
    OutputFormat::Text => Ok(render::product_detail(product)),
  }
}
