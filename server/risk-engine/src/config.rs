//! Engine configuration with sane defaults.

/// Fixed weights for risk aggregation. Read-only once the engine is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
  /// Starting risk mass assumed present in any change.
  pub base_prior: f64,
  /// Penalty added in place of a signal's delta when its data is missing or incomplete.
  pub pessimism_bias: f64,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      base_prior: 0.10,
      pessimism_bias: 0.15,
    }
  }
}
