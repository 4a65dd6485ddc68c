//! Deployment Risk Inference Engine: fixed-weight scoring; no training, no DB, no network.
//!
//! Turns commit metadata, author reputation, environment health and a security scan
//! into a confidence score, a deployment lane, an explanation trail, and next actions.
//! Used by the binary for stdin/stdout and by the inference proxy as a library.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod enricher;
pub mod error;
pub mod format;
pub mod normalize;
pub mod score;
pub mod signals;
pub mod types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use enricher::ContextEnricher;
pub use error::EngineError;
pub use normalize::normalize;
pub use types::{AssessmentPayload, AssessmentRequest, AssessmentResponse, Lane, RiskFactor};

/// Validate a raw payload and assess it with the default engine (no enrichment, no I/O).
pub fn run(payload: &AssessmentPayload) -> Result<AssessmentResponse, EngineError> {
  let request = normalize(payload)?;
  Ok(Engine::with_defaults().assess(&request))
}

/// Install the stderr `tracing` subscriber used by every binary in the workspace.
/// `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .try_init();
}
