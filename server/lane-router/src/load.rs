//! Load assessment responses from disk, leniently.
//!
//! Only `assigned_lane` is required; everything else falls back to a neutral default
//! so older or hand-written response files still route.

use std::path::{Path, PathBuf};

use risk_engine::{AssessmentResponse, Lane, RiskFactor};
use serde::Deserialize;

use crate::error::RouterError;

#[derive(Debug, Deserialize)]
struct RawResponse {
  #[serde(default)]
  confidence_score: f64,
  #[serde(default)]
  assigned_lane: Option<Lane>,
  #[serde(default)]
  risk_factors: Vec<RiskFactor>,
  #[serde(default)]
  recommended_actions: Vec<String>,
  #[serde(default = "compliant_by_default")]
  is_security_compliant: bool,
}

fn compliant_by_default() -> bool {
  true
}

/// Parse one response from JSON text.
pub fn parse_response(raw: &str) -> Result<AssessmentResponse, RouterError> {
  let raw: RawResponse = serde_json::from_str(raw)?;
  let assigned_lane = raw
    .assigned_lane
    .ok_or_else(|| RouterError::validation("assigned_lane", "response payload must include `assigned_lane`"))?;
  Ok(AssessmentResponse {
    confidence_score: raw.confidence_score,
    assigned_lane,
    risk_factors: raw.risk_factors,
    recommended_actions: raw.recommended_actions,
    is_security_compliant: raw.is_security_compliant,
  })
}

/// Load every file before routing any, so one bad file stops the whole batch.
pub fn load_responses<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<AssessmentResponse>, RouterError> {
  paths
    .iter()
    .map(|p| {
      let path = p.as_ref();
      if !path.exists() {
        return Err(RouterError::NotFound(PathBuf::from(path)));
      }
      let raw = std::fs::read_to_string(path)?;
      parse_response(&raw)
    })
    .collect()
}
