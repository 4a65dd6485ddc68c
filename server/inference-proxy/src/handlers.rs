//! HTTP handlers for the inference proxy.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use risk_engine::{normalize, AssessmentPayload, AssessmentResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub description: String,
}

pub async fn health() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "ok".into(),
    description: "Inference engine online".into(),
  })
}

/// Enrich, validate and assess one payload.
pub async fn assess(
  State(state): State<Arc<AppState>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
  let Json(value) = body?;
  let mut payload = AssessmentPayload::from_value(value)?;

  // The enricher walks git history; keep it off the async workers.
  let worker_state = Arc::clone(&state);
  let payload = tokio::task::spawn_blocking(move || {
    worker_state.enricher.enrich(&mut payload);
    payload
  })
  .await
  .map_err(|e| ApiError::Internal(format!("enrichment task failed: {}", e)))?;

  let request = normalize(&payload)?;
  let response = state.engine.assess(&request);
  tracing::info!(
    commit_id = %request.commit_id,
    lane = %response.assigned_lane,
    confidence_score = response.confidence_score,
    security_compliant = response.is_security_compliant,
    "assessed"
  );
  Ok(Json(response))
}
