//! Fixed action catalogs, keyed by lane.

use crate::types::Lane;

pub const LOW_RISK_ACTIONS: &[&str] = &["Auto-canary deployment", "Monitor metrics for 15 minutes"];

pub const MEDIUM_RISK_ACTIONS: &[&str] = &[
  "Run full integration suite",
  "Pause for manual approval",
  "Notify product owner",
];

pub const HIGH_RISK_ACTIONS: &[&str] = &[
  "Request senior review",
  "Extend soak time before full rollout",
  "Create incident readiness alert",
];

/// Replaces the lane's actions whenever the security scan did not pass.
pub const SECURITY_OVERRIDE_ACTIONS: &[&str] = &[
  "Run security/compliance scans and wait for green",
  "Do not proceed until senior review signs off",
];

pub fn actions_for(lane: Lane) -> &'static [&'static str] {
  match lane {
    Lane::LowRisk => LOW_RISK_ACTIONS,
    Lane::MediumRisk => MEDIUM_RISK_ACTIONS,
    Lane::HighRisk => HIGH_RISK_ACTIONS,
  }
}

pub fn owned(actions: &[&str]) -> Vec<String> {
  actions.iter().map(|a| a.to_string()).collect()
}
