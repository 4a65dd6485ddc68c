//! Pipeline triggers fired for each lane.

use risk_engine::Lane;

pub const LOW_RISK_TRIGGERS: &[&str] = &[
  "Trigger auto-canary workflow",
  "Post green status to GitHub",
  "Start short-lived observability monitor",
];

pub const MEDIUM_RISK_TRIGGERS: &[&str] = &[
  "Run full integration suite",
  "Pause pipeline and request manual approval",
  "Notify module maintainer via Slack",
];

pub const HIGH_RISK_TRIGGERS: &[&str] = &[
  "Gate deployment until senior review is complete",
  "Kick off extended soak job",
  "Alert incident response and page on-call",
];

pub fn triggers_for(lane: Lane) -> &'static [&'static str] {
  match lane {
    Lane::LowRisk => LOW_RISK_TRIGGERS,
    Lane::MediumRisk => MEDIUM_RISK_TRIGGERS,
    Lane::HighRisk => HIGH_RISK_TRIGGERS,
  }
}
