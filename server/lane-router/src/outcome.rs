//! Append-only JSONL log of routed outcomes.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use risk_engine::{AssessmentResponse, Lane, RiskFactor};
use serde::{Deserialize, Serialize};

use crate::error::RouterError;

pub const DEFAULT_LOG_PATH: &str = "demo/outcomes.jsonl";

/// One line of the outcome log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEntry {
  /// UTC, ISO-8601 with a trailing `Z`.
  pub timestamp: String,
  pub lane: Lane,
  pub confidence_score: f64,
  pub is_security_compliant: bool,
  pub triggers: Vec<String>,
  pub risk_factors: Vec<RiskFactor>,
  pub recommended_actions: Vec<String>,
}

impl OutcomeEntry {
  pub fn new(response: &AssessmentResponse, triggers: &[&str], at: DateTime<Utc>) -> Self {
    Self {
      timestamp: at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
      lane: response.assigned_lane,
      confidence_score: response.confidence_score,
      is_security_compliant: response.is_security_compliant,
      triggers: triggers.iter().map(|t| t.to_string()).collect(),
      risk_factors: response.risk_factors.clone(),
      recommended_actions: response.recommended_actions.clone(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct OutcomeLogger {
  path: PathBuf,
}

impl Default for OutcomeLogger {
  fn default() -> Self {
    Self::new(DEFAULT_LOG_PATH)
  }
}

impl OutcomeLogger {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Append one entry stamped with the current time.
  pub fn log(&self, response: &AssessmentResponse, triggers: &[&str]) -> Result<(), RouterError> {
    self.append(&OutcomeEntry::new(response, triggers, Utc::now()))
  }

  pub fn append(&self, entry: &OutcomeEntry) -> Result<(), RouterError> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    let mut line = serde_json::to_vec(entry)?;
    line.push(b'\n');
    let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
    file.write_all(&line)?;
    tracing::debug!(path = %self.path.display(), lane = %entry.lane, "outcome logged");
    Ok(())
  }
}
