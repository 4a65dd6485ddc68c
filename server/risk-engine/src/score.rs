//! Aggregate signals into a risk score, map it to a lane, and explain each step.

use crate::config::EngineConfig;
use crate::format::round2;
use crate::signals::{Contribution, Signal};
use crate::types::{Lane, RiskFactor};

/// Above this is high risk (strict).
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;
/// At or above this is at least medium risk (inclusive).
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.20;

/// Aggregated score plus one risk factor per signal, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
  pub score: f64,
  pub risk_factors: Vec<RiskFactor>,
}

/// Start from the prior and add each signal's contribution. Clamped to 0.0..=1.0.
pub fn aggregate(signals: &[Signal], config: &EngineConfig) -> Aggregate {
  let mut score = config.base_prior;
  let mut risk_factors = Vec::with_capacity(signals.len() + 1);

  for signal in signals {
    let (delta, description) = match signal.contribution(config) {
      Contribution::Measured { delta, description } => (delta, description),
      Contribution::Substituted { penalty, description } => (penalty, description),
    };
    score += delta;
    risk_factors.push(RiskFactor {
      vector: signal.kind.as_str().to_string(),
      impact_percentage: round2(delta * 100.0),
      description,
    });
  }

  Aggregate {
    score: score.clamp(0.0, 1.0),
    risk_factors,
  }
}

/// Score as a 0–100 percentage, two decimals.
pub fn confidence_score(score: f64) -> f64 {
  round2(score * 100.0)
}

pub fn map_lane(score: f64) -> Lane {
  if score > HIGH_RISK_THRESHOLD {
    Lane::HighRisk
  } else if score >= MEDIUM_RISK_THRESHOLD {
    Lane::MediumRisk
  } else {
    Lane::LowRisk
  }
}
