//! Structured error types for request construction.
//!
//! The engine itself is total over a validated request; everything here is raised
//! before it is reached.

use thiserror::Error;

use crate::types::ErrorOutput;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn missing(field: &str) -> Self {
    Self::validation(field, "field required")
  }

  /// Wire form of this error for CLI and HTTP callers.
  pub fn to_output(&self) -> ErrorOutput {
    match self {
      Self::Validation { field, reason } => ErrorOutput::new(reason.clone()).with_field(field.clone()),
      Self::Json(_) => ErrorOutput::new(self.to_string()),
    }
  }
}
