//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use risk_engine::types::ErrorOutput;
use risk_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Rejected(#[from] EngineError),

  #[error("body: {0}")]
  Body(#[from] JsonRejection),

  #[error("internal: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Body(rejection) => rejection.status(),
      Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = match &self {
      Self::Rejected(e) => e.to_output(),
      Self::Body(rejection) => ErrorOutput::new(rejection.body_text()),
      Self::Internal(msg) => ErrorOutput::new(msg.clone()),
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "assessment failed");
    } else {
      tracing::warn!(error = %self, "payload rejected");
    }
    (status, Json(body)).into_response()
  }
}
