// storefront/src/cli/handlers/mod.rs

// Declare handler modules
pub mod account_handlers;
pub mod cart_handlers;
pub mod catalog_handlers;
pub mod checkout_handlers;

use crate::cli::args::{Command, FormCommand};
use crate::errors::Result;
use crate::state::AppState;

/// How handlers hand their result back for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
}

/// Routes one parsed command to its handler and returns what to print.
pub fn dispatch(command: Command, state: &mut AppState, format: OutputFormat) -> Result<String> {
  tracing::debug!(store = %state.config.store_path.display(), ?command, "Dispatching command.");
  match command {
    Command::Products { brand, search } => catalog_handlers::list_products(state, brand, search, format),
    Command::Show { id } => catalog_handlers::show_product(state, &id, format),
    Command::Add { id } => cart_handlers::add_to_cart(state, &id, format),
    Command::Remove { id } => cart_handlers::remove_from_cart(state, &id, format),
    Command::Update { id, delta } => cart_handlers::update_quantity(state, &id, delta, format),
    Command::Cart => cart_handlers::view_cart(state, format),
    Command::Clear => cart_handlers::clear_cart(state, format),
    Command::Summary => checkout_handlers::order_summary(state, format),
    Command::Checkout { payment } => checkout_handlers::checkout(state, payment.as_deref(), format),
    Command::Logout => account_handlers::logout(state, format),
    Command::Validate(FormCommand::Login { username, password }) => {
      account_handlers::validate_login_form(&username, &password, format)
    }
    Command::Validate(FormCommand::Register {
      username,
      email,
      password,
      confirm_password,
    }) => account_handlers::validate_registration_form(
      kiyho::validation::RegistrationForm {
        username,
        email,
        password,
        confirm_password,
      },
      format,
    ),
  }
}
