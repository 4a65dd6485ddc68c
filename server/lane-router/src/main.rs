//! Binary entrypoint: route one or more response files.
//!
//! All files are loaded before any is routed. A file that cannot be loaded aborts
//! the run with exit code 1 and nothing is logged.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use lane_router::outcome::DEFAULT_LOG_PATH;
use lane_router::{load_responses, route, OutcomeLogger};

#[derive(Parser)]
#[command(name = "lane-router", about = "React to deployment risk assessments")]
#[command(version)]
struct Cli {
  /// Response JSON files to route
  #[arg(default_value = "response.json")]
  paths: Vec<PathBuf>,

  /// Outcome log (JSON lines, appended)
  #[arg(long, env = "OUTCOME_LOG", default_value = DEFAULT_LOG_PATH)]
  log_path: PathBuf,
}

fn main() {
  risk_engine::init_tracing();
  let cli = Cli::parse();

  let responses = match load_responses(&cli.paths) {
    Ok(r) => r,
    Err(e) => {
      let _ = writeln!(io::stderr(), "Failed to parse response: {}", e);
      std::process::exit(1);
    }
  };

  let logger = OutcomeLogger::new(cli.log_path);
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  for response in &responses {
    match route(response, &logger) {
      Ok(report) => {
        let _ = out.write_all(report.as_bytes());
      }
      Err(e) => {
        let _ = out.flush();
        tracing::error!(path = %logger.path().display(), error = %e, "could not log outcome");
        std::process::exit(1);
      }
    }
  }
  let _ = out.flush();
}
