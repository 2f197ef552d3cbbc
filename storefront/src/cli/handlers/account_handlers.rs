// storefront/src/cli/handlers/account_handlers.rs

//! Session end and form checks. Accounts themselves live outside the storefront.

use kiyho::validation::{self, FormErrors, RegistrationForm};
use serde_json::json;
use tracing::{info, instrument};

use super::OutputFormat;
use crate::errors::{AppError, Result};
use crate::render;
use crate::state::AppState;

#[instrument(name = "handler::logout", skip_all)]
pub fn logout(state: &mut AppState, format: OutputFormat) -> Result<String> {
  state.cart.end_session();
  state.cart.persist()?;
  info!("Session ended, cart cleared.");
  match format {
    OutputFormat::Json => Ok(json!({ "message": "Logged out." }).to_string()),
    OutputFormat::Text => Ok("Logged out. Your cart has been cleared.\n".to_string()),
  }
}

fn form_result(errors: FormErrors, format: OutputFormat) -> Result<String> {
  if !errors.is_valid() {
    return Err(AppError::Validation(render::form_errors(&errors).trim_end().to_string()));
  }
  match format {
    OutputFormat::Json => Ok(json!({ "valid": true }).to_string()),
    OutputFormat::Text => Ok("Form is valid.\n".to_string()),
  }
}

pub fn validate_login_form(username: &str, password: &str, format: OutputFormat) -> Result<String> {
  form_result(validation::validate_login(username, password), format)
}

pub fn validate_registration_form(form: RegistrationForm, format: OutputFormat) -> Result<String> {
  form_result(validation::validate_registration(&form), format)
}
