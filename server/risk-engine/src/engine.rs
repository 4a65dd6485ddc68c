//! Core engine: signals → score → lane → actions, then the security hard floor.

use crate::catalog;
use crate::config::EngineConfig;
use crate::score;
use crate::signals;
use crate::types::*;

/// The risk inference engine. Holds only read-only configuration.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: EngineConfig,
}

impl Engine {
  pub fn new(config: EngineConfig) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::default()
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  /// Assess one request. Deterministic and side-effect free.
  pub fn assess(&self, request: &AssessmentRequest) -> AssessmentResponse {
    let signals = signals::collect(request);
    let aggregate = score::aggregate(&signals, &self.config);
    let lane = score::map_lane(aggregate.score);

    let computed = AssessmentResponse {
      confidence_score: score::confidence_score(aggregate.score),
      assigned_lane: lane,
      risk_factors: aggregate.risk_factors,
      recommended_actions: catalog::owned(catalog::actions_for(lane)),
      is_security_compliant: request.security_scan.passed,
    };

    apply_security_override(computed, request.security_scan)
  }
}

/// Hard floor for a failed scan: force high risk and the override actions, and append
/// a terminal factor. The score and earlier factors stay as computed.
pub fn apply_security_override(
  mut response: AssessmentResponse,
  scan: SecurityScan,
) -> AssessmentResponse {
  if scan.passed {
    return response;
  }
  response.assigned_lane = Lane::HighRisk;
  response.recommended_actions = catalog::owned(catalog::SECURITY_OVERRIDE_ACTIONS);
  response.risk_factors.push(RiskFactor {
    vector: "security_scan".to_string(),
    impact_percentage: 100.0,
    description: "Security/compliance scan failed or missing; hard floor triggered".to_string(),
  });
  response
}
