// storefront/src/cli/args.rs

use clap::{Parser, Subcommand};
use kiyho::ProductId;
use std::path::PathBuf;

/// Kiyho storefront: browse the collection, manage the cart and check out.
#[derive(Debug, Parser)]
#[command(name = "kiyho-storefront", version, about)]
pub struct Cli {
  /// Storage file holding the persisted cart (overrides KIYHO_STORE_PATH).
  #[arg(long, global = true)]
  pub store: Option<PathBuf>,

  /// JSON catalog to use instead of the house collection (overrides KIYHO_CATALOG_PATH).
  #[arg(long, global = true)]
  pub catalog: Option<PathBuf>,

  /// Print JSON instead of text.
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List bags, optionally filtered by brand and name.
  Products {
    #[arg(long)]
    brand: Option<String>,
    #[arg(long, default_value = "")]
    search: String,
  },
  /// Show one bag.
  Show { id: ProductId },
  /// Add one unit of a bag to the cart.
  Add { id: ProductId },
  /// Remove a bag from the cart entirely.
  Remove { id: ProductId },
  /// Change a line's quantity by DELTA (e.g. 1 or -1).
  Update {
    id: ProductId,
    #[arg(allow_negative_numbers = true)]
    delta: i64,
  },
  /// Show the cart.
  Cart,
  /// Show subtotal, shipping, tax and total.
  Summary,
  /// Pay for the cart and empty it.
  Checkout {
    /// credit-card, paypal or esewa
    #[arg(long)]
    payment: Option<String>,
  },
  /// Empty the cart.
  Clear,
  /// End the session; the cart does not outlive it.
  Logout,
  /// Check login or registration form input.
  #[command(subcommand)]
  Validate(FormCommand),
}

#[derive(Debug, Subcommand)]
pub enum FormCommand {
  Login {
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    password: String,
  },
  Register {
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
    #[arg(long, default_value = "")]
    confirm_password: String,
  },
}
