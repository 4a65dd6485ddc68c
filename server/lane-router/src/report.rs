//! Plain-text lane report.

use std::fmt::Write;

use risk_engine::format::number;
use risk_engine::AssessmentResponse;

/// Lane, score, every risk factor, and the triggers to fire, followed by a blank line.
pub fn render(response: &AssessmentResponse, triggers: &[&str]) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "Assigned lane: {} ({}% confidence)",
    response.assigned_lane,
    number(response.confidence_score)
  );
  let _ = writeln!(out, "Risk factors:");
  for factor in &response.risk_factors {
    let _ = writeln!(
      out,
      "  - {}: {}% -> {}",
      factor.vector,
      number(factor.impact_percentage),
      factor.description
    );
  }
  let _ = writeln!(out, "Recommended triggers:");
  for action in triggers {
    let _ = writeln!(out, "  * {}", action);
  }
  out.push('\n');
  out
}
