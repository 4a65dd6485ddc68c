//! mock-payloads: synthetic assessment payloads for demos and load checks
//!
//! Usage:
//!   mock-payloads --count 5                                   # write payloads only
//!   mock-payloads --seed 7 --post http://localhost:8001/assess # also send them to the proxy
//!
//! Responses from `--post` are saved as `response_<payload stem>.json`, ready for
//! `lane-router`.

mod generate;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "mock-payloads", about = "Generate synthetic deployment risk payloads")]
#[command(version)]
struct Cli {
  /// Number of payloads to emit
  #[arg(long, default_value_t = 5)]
  count: usize,

  /// Where payload files are written
  #[arg(long, default_value = "demo/synthetic")]
  out_dir: PathBuf,

  /// Seed for reproducible payloads
  #[arg(long)]
  seed: Option<u64>,

  /// Inference proxy endpoint to post each payload to
  #[arg(long)]
  post: Option<String>,

  /// Where proxy responses are written (with --post)
  #[arg(long, default_value = "demo/traffic")]
  responses_dir: PathBuf,
}

fn main() {
  risk_engine::init_tracing();
  let cli = Cli::parse();
  if let Err(e) = run(&cli) {
    eprintln!("mock-payloads: {}", e);
    std::process::exit(1);
  }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
  let mut rng = match cli.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let payloads = generate::generate(cli.count, &cli.out_dir, &mut rng)?;
  println!("Generated mock payloads:");
  for p in &payloads {
    println!("  - {}", p.display());
  }

  if let Some(url) = &cli.post {
    let client = reqwest::blocking::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()?;
    fs::create_dir_all(&cli.responses_dir)?;
    for path in &payloads {
      let saved = send_payload(&client, url, path, &cli.responses_dir)?;
      println!("Posted {} -> {}", path.display(), saved.display());
    }
  }
  Ok(())
}

fn send_payload(
  client: &reqwest::blocking::Client,
  url: &str,
  path: &Path,
  responses_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
  let body: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
  let text = client.post(url).json(&body).send()?.error_for_status()?.text()?;

  let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("payload");
  let out = responses_dir.join(format!("response_{}.json", stem));
  fs::write(&out, text)?;
  tracing::debug!(payload = %path.display(), response = %out.display(), "saved proxy response");
  Ok(out)
}
