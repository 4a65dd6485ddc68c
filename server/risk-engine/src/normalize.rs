//! Parse raw payloads and validate them into fully populated AssessmentRequests.

use serde_json::Value;

use crate::error::EngineError;
use crate::types::*;

impl AssessmentPayload {
  /// Parse a payload from JSON text (envelope or bare request).
  pub fn from_json(raw: &str) -> Result<Self, EngineError> {
    let value: Value = serde_json::from_str(raw)?;
    Self::from_value(value)
  }

  /// Accept either `{"request": {...}, "security_scan_passed": bool}` or a bare
  /// request object.
  pub fn from_value(value: Value) -> Result<Self, EngineError> {
    let is_envelope = match &value {
      Value::Object(map) => map.contains_key("request"),
      _ => return Err(EngineError::validation("request", "expected a JSON object")),
    };
    if is_envelope {
      return Ok(serde_json::from_value(value)?);
    }
    Ok(Self {
      request: serde_json::from_value(value)?,
      security_scan_passed: None,
    })
  }

  /// Envelope flag first, then the inner request's, then passed.
  pub fn security_scan_passed(&self) -> bool {
    self
      .security_scan_passed
      .or(self.request.security_scan_passed)
      .unwrap_or(true)
  }
}

/// Validate a raw payload and fill defaults. Fails fast on the first bad field.
pub fn normalize(payload: &AssessmentPayload) -> Result<AssessmentRequest, EngineError> {
  let raw = &payload.request;

  let commit_id = raw
    .commit_id
    .clone()
    .ok_or_else(|| EngineError::missing("commit_id"))?;

  let author = raw.author.as_ref().ok_or_else(|| EngineError::missing("author"))?;
  let author_id = author.id.clone().ok_or_else(|| EngineError::missing("author.id"))?;
  let domain_familiarity_score =
    unit_interval("author.domain_familiarity_score", author.domain_familiarity_score)?;
  let past_success_rate = unit_interval("author.past_success_rate", author.past_success_rate)?;

  let change = raw
    .change_metadata
    .as_ref()
    .ok_or_else(|| EngineError::missing("change_metadata"))?;
  let lines_added = non_negative("change_metadata.lines_added", change.lines_added)?;
  let lines_removed = non_negative("change_metadata.lines_removed", change.lines_removed)?;
  let cyclomatic_complexity_delta = change.cyclomatic_complexity_delta.unwrap_or(0.0);
  if !cyclomatic_complexity_delta.is_finite() {
    return Err(EngineError::validation(
      "change_metadata.cyclomatic_complexity_delta",
      "must be a finite number",
    ));
  }

  let health = raw
    .environment_health
    .as_ref()
    .ok_or_else(|| EngineError::missing("environment_health"))?;
  let open_incidents = non_negative("environment_health.open_incidents", health.open_incidents)?;

  Ok(AssessmentRequest {
    commit_id,
    author: Author {
      id: author_id,
      domain_familiarity_score,
      past_success_rate,
    },
    change_metadata: ChangeMetadata {
      lines_added,
      lines_removed,
      files_modified: change.files_modified.clone().unwrap_or_default(),
      cyclomatic_complexity_delta,
    },
    environment_health: EnvironmentHealth {
      status: health.status.unwrap_or(HealthStatus::Healthy),
      open_incidents,
    },
    security_scan: SecurityScan {
      passed: payload.security_scan_passed(),
    },
  })
}

fn unit_interval(field: &str, value: Option<f64>) -> Result<f64, EngineError> {
  let v = value.unwrap_or(0.0);
  if !(0.0..=1.0).contains(&v) {
    return Err(EngineError::validation(field, "must be between 0 and 1"));
  }
  Ok(v)
}

fn non_negative(field: &str, value: Option<i64>) -> Result<u64, EngineError> {
  let v = value.unwrap_or(0);
  u64::try_from(v).map_err(|_| EngineError::validation(field, "must be >= 0"))
}
