//! Number formatting shared by risk-factor descriptions and reports.

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}

/// Shortest decimal form, always with a fractional part ("15.0", "4.17", "-8.55").
pub fn number(v: f64) -> String {
  if v.is_finite() && v.fract() == 0.0 {
    format!("{:.1}", v)
  } else {
    format!("{}", v)
  }
}
