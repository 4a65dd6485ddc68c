//! Request/response types for the risk engine (JSON contract with the pipeline).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw payload (JSON contract: what the caller sends, every leaf optional)
// ---------------------------------------------------------------------------

/// One inbound payload: either the `{"request": ..., "security_scan_passed": ...}`
/// envelope or a bare request object. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentPayload {
  pub request: RawRequest,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub security_scan_passed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub commit_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<RawAuthor>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub change_metadata: Option<RawChangeMetadata>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub environment_health: Option<RawEnvironmentHealth>,
  /// Accepted inside a bare request; the envelope field wins when both are present.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub security_scan_passed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAuthor {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub domain_familiarity_score: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub past_success_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChangeMetadata {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lines_added: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lines_removed: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub files_modified: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cyclomatic_complexity_delta: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEnvironmentHealth {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<HealthStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub open_incidents: Option<i64>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
  Healthy,
  Degraded,
  Critical,
  /// Any status string we don't recognise.
  #[serde(other)]
  Unknown,
}

impl HealthStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Healthy => "healthy",
      Self::Degraded => "degraded",
      Self::Critical => "critical",
      Self::Unknown => "unknown",
    }
  }
}

/// Deployment-risk bucket driving downstream gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
  LowRisk,
  MediumRisk,
  HighRisk,
}

impl Lane {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::LowRisk => "low_risk",
      Self::MediumRisk => "medium_risk",
      Self::HighRisk => "high_risk",
    }
  }
}

impl std::fmt::Display for Lane {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Validated request (what the engine sees)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
  pub id: String,
  pub domain_familiarity_score: f64,
  pub past_success_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeMetadata {
  pub lines_added: u64,
  pub lines_removed: u64,
  pub files_modified: Vec<String>,
  pub cyclomatic_complexity_delta: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentHealth {
  pub status: HealthStatus,
  pub open_incidents: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityScan {
  pub passed: bool,
}

/// Fully populated request. Built by `normalize`, never partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentRequest {
  pub commit_id: String,
  pub author: Author,
  pub change_metadata: ChangeMetadata,
  pub environment_health: EnvironmentHealth,
  pub security_scan: SecurityScan,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
  pub vector: String,
  pub impact_percentage: f64,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
  pub confidence_score: f64,
  pub assigned_lane: Lane,
  pub risk_factors: Vec<RiskFactor>,
  pub recommended_actions: Vec<String>,
  pub is_security_compliant: bool,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lane_serializes_snake_case() {
    let json = serde_json::to_string(&Lane::MediumRisk).unwrap();
    assert_eq!(json, "\"medium_risk\"");
    let back: Lane = serde_json::from_str("\"high_risk\"").unwrap();
    assert_eq!(back, Lane::HighRisk);
  }

  #[test]
  fn unrecognised_status_becomes_unknown() {
    let health: RawEnvironmentHealth =
      serde_json::from_str(r#"{"status": "on-fire", "open_incidents": 1}"#).unwrap();
    assert_eq!(health.status, Some(HealthStatus::Unknown));
  }

  #[test]
  fn error_output_omits_absent_field() {
    let json = serde_json::to_string(&ErrorOutput::new("boom")).unwrap();
    assert_eq!(json, r#"{"error":true,"message":"boom"}"#);
  }
}
