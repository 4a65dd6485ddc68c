//! Integration tests for the risk engine.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use risk_engine::catalog::SECURITY_OVERRIDE_ACTIONS;
use risk_engine::types::*;
use risk_engine::{normalize, AssessmentPayload, Engine, EngineError, Lane};

fn fixture_payload(security_scan_passed: bool) -> AssessmentPayload {
  let json = format!(
    r#"{{
      "request": {{
        "commit_id": "def",
        "author": {{"id": "dev", "domain_familiarity_score": 0.2, "past_success_rate": 0.3}},
        "change_metadata": {{
          "lines_added": 200,
          "lines_removed": 40,
          "files_modified": ["critical/service"],
          "cyclomatic_complexity_delta": 2.0
        }},
        "environment_health": {{"status": "critical", "open_incidents": 4}}
      }},
      "security_scan_passed": {}
    }}"#,
    security_scan_passed
  );
  AssessmentPayload::from_json(&json).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn request(
  added: u64,
  removed: u64,
  files: Vec<String>,
  complexity: f64,
  status: HealthStatus,
  incidents: u64,
  familiarity: f64,
  success: f64,
  passed: bool,
) -> AssessmentRequest {
  AssessmentRequest {
    commit_id: "prop".into(),
    author: Author {
      id: "dev".into(),
      domain_familiarity_score: familiarity,
      past_success_rate: success,
    },
    change_metadata: ChangeMetadata {
      lines_added: added,
      lines_removed: removed,
      files_modified: files,
      cyclomatic_complexity_delta: complexity,
    },
    environment_health: EnvironmentHealth {
      status,
      open_incidents: incidents,
    },
    security_scan: SecurityScan { passed },
  }
}

#[test]
fn low_risk_scenario() {
  let req = request(
    5,
    2,
    vec!["lib".into()],
    0.01,
    HealthStatus::Healthy,
    0,
    0.9,
    0.95,
    true,
  );
  let out = Engine::with_defaults().assess(&req);
  assert_eq!(out.assigned_lane, Lane::LowRisk);
  assert!(out.confidence_score < 20.0);
  assert!(out.is_security_compliant);
}

#[test]
fn failed_scan_scenario_is_high_risk_with_override_actions() {
  let req = normalize(&fixture_payload(false)).unwrap();
  let out = Engine::with_defaults().assess(&req);
  assert_eq!(out.assigned_lane, Lane::HighRisk);
  assert!(!out.is_security_compliant);
  assert_eq!(out.recommended_actions, SECURITY_OVERRIDE_ACTIONS);
  assert_eq!(out.confidence_score, 100.0);
  assert_eq!(out.risk_factors.len(), 5);
  assert_eq!(out.risk_factors[4].vector, "security_scan");
}

#[test]
fn empty_file_list_is_penalised_pessimistically() {
  let req = request(10, 0, vec![], 0.0, HealthStatus::Healthy, 0, 0.5, 0.5, true);
  let out = Engine::with_defaults().assess(&req);
  let factor = out
    .risk_factors
    .iter()
    .find(|f| f.vector == "file_history")
    .unwrap();
  assert!(factor.description.contains("missing or incomplete data"));
  assert_eq!(factor.impact_percentage, 15.0);
}

#[test]
fn simplifying_refactor_lowers_the_score() {
  let req = request(
    600,
    0,
    vec!["lib".into()],
    -0.5,
    HealthStatus::Healthy,
    0,
    1.0,
    1.0,
    true,
  );
  let out = Engine::with_defaults().assess(&req);
  assert_eq!(out.confidence_score, 46.0);
  assert_eq!(out.assigned_lane, Lane::MediumRisk);
  assert_eq!(out.risk_factors[0].impact_percentage, 31.0);
}

#[test]
fn extreme_simplification_floors_the_score_at_zero() {
  let req = request(
    0,
    0,
    vec!["lib".into()],
    -50.0,
    HealthStatus::Healthy,
    0,
    1.0,
    1.0,
    true,
  );
  let out = Engine::with_defaults().assess(&req);
  assert_eq!(out.confidence_score, 0.0);
  assert_eq!(out.assigned_lane, Lane::LowRisk);
}

#[test]
fn unrecognised_status_scores_the_default() {
  let payload = AssessmentPayload::from_json(
    r#"{
      "commit_id": "x",
      "author": {"id": "dev", "domain_familiarity_score": 1.0, "past_success_rate": 1.0},
      "change_metadata": {"lines_added": 0, "lines_removed": 0, "files_modified": ["lib"]},
      "environment_health": {"status": "on-fire"}
    }"#,
  )
  .unwrap();
  let out = Engine::with_defaults().assess(&normalize(&payload).unwrap());
  assert_eq!(out.risk_factors[1].impact_percentage, 20.0);
}

#[test]
fn response_json_matches_wire_contract() {
  let req = normalize(&fixture_payload(true)).unwrap();
  let out = Engine::with_defaults().assess(&req);
  let value = serde_json::to_value(&out).unwrap();
  assert_eq!(value["assigned_lane"], "high_risk");
  assert_eq!(value["is_security_compliant"], true);
  assert_eq!(value["risk_factors"][0]["vector"], "code_churn");
  assert!(value["risk_factors"][0]["impact_percentage"].is_f64());
  assert_eq!(
    value["recommended_actions"],
    serde_json::json!([
      "Request senior review",
      "Extend soak time before full rollout",
      "Create incident readiness alert"
    ])
  );
}

#[test]
fn deterministic_output_across_runs() {
  let req = normalize(&fixture_payload(false)).unwrap();
  let json1 = serde_json::to_string(&Engine::with_defaults().assess(&req)).unwrap();
  let json2 = serde_json::to_string(&Engine::with_defaults().assess(&req)).unwrap();
  assert_eq!(json1, json2, "Same inputs must produce identical JSON output");
}

#[test]
fn missing_required_field_gives_clear_error() {
  let payload = AssessmentPayload::from_json(
    r#"{"request": {"author": {"id": "dev"}, "change_metadata": {}, "environment_health": {}}}"#,
  )
  .unwrap();
  let err = normalize(&payload).unwrap_err();
  assert!(matches!(err, EngineError::Validation { .. }));
  assert!(
    err.to_string().contains("commit_id"),
    "Error should mention the field: {}",
    err
  );
  assert_eq!(err.to_output().field.as_deref(), Some("commit_id"));
}

#[test]
fn unknown_fields_are_ignored() {
  let payload = AssessmentPayload::from_json(
    r#"{
      "request": {
        "commit_id": "x",
        "author": {"id": "dev", "team": "payments"},
        "change_metadata": {"lines_added": 1, "ticket": "OPS-1"},
        "environment_health": {"status": "degraded"},
        "extra": 42
      },
      "trace_id": "t-1"
    }"#,
  )
  .unwrap();
  assert!(normalize(&payload).is_ok());
}

fn health_status() -> impl Strategy<Value = HealthStatus> {
  prop_oneof![
    Just(HealthStatus::Healthy),
    Just(HealthStatus::Degraded),
    Just(HealthStatus::Critical),
    Just(HealthStatus::Unknown),
  ]
}

fn changed_files() -> impl Strategy<Value = Vec<String>> {
  prop::collection::vec("(src|critical|hotspot|lib)/[a-z]{1,8}", 0..4)
}

proptest! {
  /// Property: the confidence score is always a percentage.
  #[test]
  fn prop_confidence_is_a_percentage(
    added in 0u64..100_000,
    removed in 0u64..100_000,
    files in changed_files(),
    complexity in -50.0f64..50.0,
    status in health_status(),
    incidents in 0u64..1_000,
    familiarity in 0.0f64..=1.0,
    success in 0.0f64..=1.0,
    passed in any::<bool>(),
  ) {
    let req = request(added, removed, files, complexity, status, incidents, familiarity, success, passed);
    let out = Engine::with_defaults().assess(&req);
    prop_assert!(out.confidence_score >= 0.0);
    prop_assert!(out.confidence_score <= 100.0);
    prop_assert_eq!(out.is_security_compliant, passed);
    if !passed {
      prop_assert_eq!(out.assigned_lane, Lane::HighRisk);
      prop_assert_eq!(out.recommended_actions.clone(), SECURITY_OVERRIDE_ACTIONS);
    }
  }

  /// Property: more churn never lowers the score.
  #[test]
  fn prop_score_monotonic_in_churn(
    base in 0u64..2_000,
    extra in 0u64..2_000,
    files in changed_files(),
    complexity in 0.0f64..5.0,
    status in health_status(),
    familiarity in 0.0f64..=1.0,
    success in 0.0f64..=1.0,
  ) {
    let engine = Engine::with_defaults();
    let small = request(base, 0, files.clone(), complexity, status, 1, familiarity, success, true);
    let large = request(base, extra, files, complexity, status, 1, familiarity, success, true);
    prop_assert!(engine.assess(&small).confidence_score <= engine.assess(&large).confidence_score);
  }
}
