//! Binary entrypoint: read one payload (file argument or stdin), write one response to stdout.
//!
//! Author scores missing from the payload are derived from the git repository at
//! `REPO_PATH` (default: current directory). Rejected payloads produce an
//! ErrorOutput on stdout and exit code 2.

use risk_engine::{normalize, AssessmentPayload, ContextEnricher, Engine, EngineError};
use std::io::{self, Read, Write};
use std::path::PathBuf;

fn main() {
  risk_engine::init_tracing();
  match run_binary() {
    Ok(()) => {}
    Err(RunError::Rejected(e)) => {
      tracing::warn!(error = %e, "payload rejected");
      let _ = serde_json::to_writer(io::stdout(), &e.to_output());
      let _ = writeln!(io::stdout());
      std::process::exit(2);
    }
    Err(RunError::Io(e)) => {
      let _ = writeln!(io::stderr(), "risk-engine error: {}", e);
      std::process::exit(1);
    }
  }
}

enum RunError {
  Rejected(EngineError),
  Io(Box<dyn std::error::Error>),
}

impl From<EngineError> for RunError {
  fn from(e: EngineError) -> Self {
    Self::Rejected(e)
  }
}

impl From<io::Error> for RunError {
  fn from(e: io::Error) -> Self {
    Self::Io(Box::new(e))
  }
}

fn run_binary() -> Result<(), RunError> {
  let raw = match std::env::args().nth(1) {
    Some(path) => std::fs::read_to_string(&path)?,
    None => {
      let mut raw = String::new();
      io::stdin().lock().read_to_string(&mut raw)?;
      raw
    }
  };

  let repo_path = std::env::var("REPO_PATH").map(PathBuf::from).unwrap_or_else(|_| ".".into());
  let mut payload = AssessmentPayload::from_json(&raw)?;
  ContextEnricher::new(repo_path).enrich(&mut payload);
  let request = normalize(&payload)?;

  let out = Engine::with_defaults().assess(&request);
  tracing::info!(
    commit_id = %request.commit_id,
    lane = %out.assigned_lane,
    confidence_score = out.confidence_score,
    "assessment complete"
  );

  let json = serde_json::to_vec_pretty(&out).map_err(|e| RunError::Io(Box::new(e)))?;
  let mut stdout = io::stdout();
  stdout.write_all(&json)?;
  writeln!(stdout)?;
  Ok(())
}
