//! The four independent risk signals and how each one contributes to the score.

use crate::config::EngineConfig;
use crate::format::{number, round2};
use crate::types::{AssessmentRequest, Author, ChangeMetadata, EnvironmentHealth, HealthStatus};

/// Completeness below this is treated as missing data.
pub const MIN_COMPLETENESS: f64 = 0.6;

/// Path fragments marking a file as a known hotspot.
const HOTSPOT_MARKERS: &[&str] = &["critical", "hotspot"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
  CodeChurn,
  SystemHealth,
  AuthorPersona,
  FileHistory,
}

impl SignalKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::CodeChurn => "code_churn",
      Self::SystemHealth => "system_health",
      Self::AuthorPersona => "author_persona",
      Self::FileHistory => "file_history",
    }
  }
}

/// Outcome of evaluating one signal against a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
  pub kind: SignalKind,
  pub delta: f64,
  /// How much real data backed the delta, 0..=1.
  pub completeness: f64,
  pub description: String,
  /// Forces the pessimism substitution regardless of completeness.
  pub requires_pessimism: bool,
}

/// What a signal actually adds to the score.
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
  /// The signal's own delta.
  Measured { delta: f64, description: String },
  /// The pessimism bias, standing in for a signal we can't trust.
  Substituted { penalty: f64, description: String },
}

impl Contribution {
  pub fn delta(&self) -> f64 {
    match self {
      Self::Measured { delta, .. } => *delta,
      Self::Substituted { penalty, .. } => *penalty,
    }
  }
}

impl Signal {
  pub fn contribution(&self, config: &EngineConfig) -> Contribution {
    if self.requires_pessimism || self.completeness < MIN_COMPLETENESS {
      Contribution::Substituted {
        penalty: config.pessimism_bias,
        description: format!(
          "{}: +{:.2} (missing or incomplete data)",
          self.kind.as_str(),
          config.pessimism_bias
        ),
      }
    } else {
      Contribution::Measured {
        delta: self.delta,
        description: self.description.clone(),
      }
    }
  }
}

/// All signals in evaluation order.
pub fn collect(request: &AssessmentRequest) -> [Signal; 4] {
  [
    code_churn(&request.change_metadata),
    system_health(&request.environment_health),
    author_persona(&request.author),
    file_history(&request.change_metadata),
  ]
}

/// Line churn (capped 0.35) plus complexity growth (capped 0.15), together capped 0.45.
pub fn code_churn(change: &ChangeMetadata) -> Signal {
  let total_changes = change.lines_added + change.lines_removed;
  let lines_component = (total_changes as f64 / 1200.0).min(0.35);
  // Negative deltas (simplifications) lower the component; only the top is capped.
  let complexity_component = (change.cyclomatic_complexity_delta * 0.08).min(0.15);
  let churn_score = (lines_component + complexity_component).min(0.45);

  let detail = format!(
    "{} changed lines ({:.2} risk) and complexity delta {:.2} ({:.2} risk) combine for {:.2}",
    total_changes,
    lines_component,
    change.cyclomatic_complexity_delta,
    complexity_component,
    churn_score
  );
  let explanation = format!(
    "Line churn contributes {}% risk; complexity delta contributes {}% risk",
    number(round2(lines_component * 100.0)),
    number(round2(complexity_component * 100.0))
  );

  Signal {
    kind: SignalKind::CodeChurn,
    delta: churn_score,
    completeness: 1.0,
    description: format!(
      "+{}% risk ({}); {}",
      number(round2(churn_score * 100.0)),
      detail,
      explanation
    ),
    requires_pessimism: false,
  }
}

pub fn system_health(health: &EnvironmentHealth) -> Signal {
  let base = match health.status {
    HealthStatus::Healthy => 0.0,
    HealthStatus::Degraded => 0.25,
    HealthStatus::Critical => 0.35,
    HealthStatus::Unknown => 0.2,
  };
  let incident_penalty = (health.open_incidents as f64 * 0.02).min(0.10);
  let delta = base + incident_penalty;

  Signal {
    kind: SignalKind::SystemHealth,
    delta,
    completeness: 1.0,
    description: format!(
      "+{}% risk ({} environment with {} open incidents)",
      number(round2(delta * 100.0)),
      health.status.as_str(),
      health.open_incidents
    ),
    requires_pessimism: false,
  }
}

/// Experienced, reliable authors lower risk; the delta may go negative.
pub fn author_persona(author: &Author) -> Signal {
  let expertise = (author.domain_familiarity_score + author.past_success_rate) / 2.0;
  let delta = (0.18 - expertise * 0.18).max(-0.10);

  Signal {
    kind: SignalKind::AuthorPersona,
    delta,
    completeness: 1.0,
    description: format!(
      "{}% risk (familiarity {:.2}, success {:.2})",
      number(round2(delta * 100.0)),
      author.domain_familiarity_score,
      author.past_success_rate
    ),
    requires_pessimism: false,
  }
}

pub fn file_history(change: &ChangeMetadata) -> Signal {
  if change.files_modified.is_empty() {
    return Signal {
      kind: SignalKind::FileHistory,
      delta: 0.0,
      completeness: 0.0,
      description: "No file history metadata provided".to_string(),
      requires_pessimism: true,
    };
  }

  let touches_hotspot = change
    .files_modified
    .iter()
    .any(|path| HOTSPOT_MARKERS.iter().any(|m| path.contains(m)));
  let delta = if touches_hotspot { 0.25 } else { 0.05 };

  Signal {
    kind: SignalKind::FileHistory,
    delta,
    completeness: 0.9,
    description: format!(
      "+{}% risk ({} files changed ({} files))",
      number(round2(delta * 100.0)),
      if touches_hotspot { "hotspot" } else { "regular" },
      change.files_modified.len()
    ),
    requires_pessimism: false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn change(added: u64, removed: u64, files: &[&str], complexity: f64) -> ChangeMetadata {
    ChangeMetadata {
      lines_added: added,
      lines_removed: removed,
      files_modified: files.iter().map(|f| f.to_string()).collect(),
      cyclomatic_complexity_delta: complexity,
    }
  }

  #[test]
  fn churn_components_are_capped() {
    let s = code_churn(&change(5000, 5000, &["a"], 10.0));
    assert_eq!(s.delta, 0.45);
    let s = code_churn(&change(600, 0, &["a"], 0.0));
    assert!((s.delta - 0.35).abs() < 1e-12);
  }

  #[test]
  fn churn_description_reads_naturally() {
    let s = code_churn(&change(200, 40, &["a"], 2.0));
    assert_eq!(
      s.description,
      "+35.0% risk (240 changed lines (0.20 risk) and complexity delta 2.00 (0.15 risk) combine for 0.35); \
       Line churn contributes 20.0% risk; complexity delta contributes 15.0% risk"
    );
  }

  #[test]
  fn simplification_reduces_churn() {
    let s = code_churn(&change(600, 0, &["a"], -0.5));
    assert!((s.delta - 0.31).abs() < 1e-12);
    assert!(s.description.starts_with("+31.0% risk"));
    assert!(s.description.ends_with("complexity delta contributes -4.0% risk"));
  }

  #[test]
  fn health_lookup_and_incident_cap() {
    let degraded = system_health(&EnvironmentHealth {
      status: HealthStatus::Degraded,
      open_incidents: 2,
    });
    assert!((degraded.delta - 0.29).abs() < 1e-12);

    let critical = system_health(&EnvironmentHealth {
      status: HealthStatus::Critical,
      open_incidents: 40,
    });
    assert!((critical.delta - 0.45).abs() < 1e-12);

    let unknown = system_health(&EnvironmentHealth {
      status: HealthStatus::Unknown,
      open_incidents: 0,
    });
    assert_eq!(unknown.delta, 0.2);
  }

  #[test]
  fn expert_author_reduces_nothing_below_zero() {
    let expert = author_persona(&Author {
      id: "dev".into(),
      domain_familiarity_score: 1.0,
      past_success_rate: 1.0,
    });
    assert_eq!(expert.delta, 0.0);

    let novice = author_persona(&Author {
      id: "dev".into(),
      domain_familiarity_score: 0.0,
      past_success_rate: 0.0,
    });
    assert_eq!(novice.delta, 0.18);
    assert_eq!(novice.description, "18.0% risk (familiarity 0.00, success 0.00)");
  }

  #[test]
  fn hotspot_paths_raise_file_history() {
    let hot = file_history(&change(1, 1, &["src/lib.rs", "critical/service"], 0.0));
    assert_eq!(hot.delta, 0.25);
    assert_eq!(hot.description, "+25.0% risk (hotspot files changed (2 files))");

    let regular = file_history(&change(1, 1, &["lib"], 0.0));
    assert_eq!(regular.delta, 0.05);
    assert_eq!(regular.completeness, 0.9);
  }

  #[test]
  fn empty_file_list_forces_pessimism() {
    let s = file_history(&change(1, 1, &[], 0.0));
    assert!(s.requires_pessimism);
    assert_eq!(s.completeness, 0.0);

    match s.contribution(&EngineConfig::default()) {
      Contribution::Substituted { penalty, description } => {
        assert_eq!(penalty, 0.15);
        assert_eq!(description, "file_history: +0.15 (missing or incomplete data)");
      }
      other => panic!("expected substitution, got {:?}", other),
    }
  }

  #[test]
  fn low_completeness_alone_triggers_substitution() {
    let s = Signal {
      kind: SignalKind::SystemHealth,
      delta: 0.3,
      completeness: 0.59,
      description: "x".into(),
      requires_pessimism: false,
    };
    assert_eq!(s.contribution(&EngineConfig::default()).delta(), 0.15);

    let trusted = Signal { completeness: 0.6, ..s };
    assert_eq!(trusted.contribution(&EngineConfig::default()).delta(), 0.3);
  }
}
