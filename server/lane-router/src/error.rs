//! Structured error types for the lane router.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
  #[error("Response file {} does not exist", .0.display())]
  NotFound(PathBuf),

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl RouterError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
