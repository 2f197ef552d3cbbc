// storefront/src/cli/mod.rs

// Declare child modules
pub mod args;
pub mod handlers;

pub use args::{Cli, Command};
pub use handlers::dispatch;
