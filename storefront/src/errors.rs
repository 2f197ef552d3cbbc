// storefront/src/errors.rs

use kiyho::{CheckoutError, KiyhoError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Checkout Error: {source}")]
  Checkout {
    #[from]
    source: CheckoutError,
  },

  #[error("Storefront Error: {source}")]
  Core {
    #[from]
    source: KiyhoError,
  },

  #[error("Output Error: {0}")]
  Output(#[from] serde_json::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<KiyhoError>() {
      Ok(source) => AppError::Core { source },
      Err(err) => AppError::Internal(format!("{:#}", err)),
    }
  }
}

impl AppError {
  /// Process exit status for this error.
  pub fn exit_code(&self) -> i32 {
    match self {
      AppError::Validation(_) | AppError::Checkout { .. } => 1,
      AppError::NotFound(_) => 3,
      AppError::Config(_) => 2,
      AppError::Core { .. } | AppError::Output(_) | AppError::Internal(_) => 4,
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
