// storefront/src/main.rs

// Declare modules for the application
mod cli;
mod config;
mod errors;
mod render;
mod state;

use crate::cli::handlers::OutputFormat;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::state::AppState;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn run(cli: Cli) -> AppResult<String> {
  let config = AppConfig::from_env()?.with_overrides(cli.store, cli.catalog);
  let mut state = AppState::load(config)?;
  let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
  cli::dispatch(cli.command, &mut state, format)
}

fn main() {
  // Quiet by default so command output stays readable; RUST_LOG turns it up.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  tracing::debug!(?cli, "Starting Kiyho storefront command.");

  match run(cli) {
    Ok(output) => print!("{}", output),
    Err(e) => {
      tracing::debug!(error = ?e, "Command failed.");
      eprintln!("{}", e);
      std::process::exit(e.exit_code());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cli::Command;
  use crate::errors::AppError;
  use kiyho::ProductId;

  fn state_in(dir: &tempfile::TempDir) -> AppState {
    let config = AppConfig {
      store_path: dir.path().join("storage.json"),
      catalog_path: None,
    };
    AppState::load(config).unwrap()
  }

  fn run_in(dir: &tempfile::TempDir, command: Command) -> AppResult<String> {
    // A fresh state per command, like separate page loads over one storage file.
    let mut state = state_in(dir);
    cli::dispatch(command, &mut state, OutputFormat::Text)
  }

  #[test]
  fn cart_persists_between_commands() {
    let dir = tempfile::tempdir().unwrap();
    run_in(&dir, Command::Add { id: ProductId::Int(2) }).unwrap();
    run_in(&dir, Command::Add { id: ProductId::Int(2) }).unwrap();
    run_in(&dir, Command::Add { id: ProductId::Int(4) }).unwrap();

    let cart = run_in(&dir, Command::Cart).unwrap();
    assert!(cart.contains("Gucci GG Marmont"), "{}", cart);
    assert!(cart.contains("Items: 3  Total: $7,150.00"), "{}", cart);
  }

  #[test]
  fn unknown_product_leaves_cart_alone() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(&dir, Command::Add { id: ProductId::Int(42) }).unwrap();
    assert!(out.starts_with("No product with id 42"), "{}", out);
    assert!(out.contains("Your cart is empty"), "{}", out);

    let err = run_in(&dir, Command::Show { id: ProductId::Int(42) }).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
  }

  #[test]
  fn checkout_flow() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_in(&dir, Command::Checkout { payment: Some("esewa".into()) }).unwrap_err();
    assert_eq!(err.exit_code(), 1);

    run_in(&dir, Command::Add { id: ProductId::Int(4) }).unwrap();
    let err = run_in(&dir, Command::Checkout { payment: None }).unwrap_err();
    assert!(err.to_string().contains("Payment method required"), "{}", err);
    let err = run_in(&dir, Command::Checkout { payment: Some("cash".into()) }).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let receipt = run_in(&dir, Command::Checkout { payment: Some("paypal".into()) }).unwrap();
    assert!(receipt.contains("Payment Successful!"), "{}", receipt);
    // 1350 + free shipping + 108 tax
    assert!(receipt.contains("$1,458.00"), "{}", receipt);

    let cart = run_in(&dir, Command::Cart).unwrap();
    assert_eq!(cart, "Your cart is empty\n");
  }

  #[test]
  fn logout_clears_cart() {
    let dir = tempfile::tempdir().unwrap();
    run_in(&dir, Command::Add { id: ProductId::Int(1) }).unwrap();
    run_in(&dir, Command::Logout).unwrap();
    assert_eq!(run_in(&dir, Command::Cart).unwrap(), "Your cart is empty\n");
  }

  #[test]
  fn catalog_file_with_negative_price_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(&catalog_path, r#"[{"id": 1, "brand": "X", "name": "Refund Bag", "price": -500.0}]"#).unwrap();
    let config = AppConfig {
      store_path: dir.path().join("storage.json"),
      catalog_path: Some(catalog_path),
    };
    let err = AppState::load(config).err().unwrap();
    assert!(matches!(err, AppError::Core { .. }), "{}", err);
    assert!(err.to_string().contains("product 1 is invalid"), "{}", err);
  }

  #[test]
  fn filtered_listing() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
      &dir,
      Command::Products {
        brand: None,
        search: "mini".into(),
      },
    )
    .unwrap();
    assert!(out.contains("Mini Kelly"), "{}", out);
    assert!(out.contains("Jodie Mini"), "{}", out);
    assert_eq!(out.lines().count(), 2, "{}", out);
  }
}
