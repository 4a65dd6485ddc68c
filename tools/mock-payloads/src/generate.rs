//! Random but plausible assessment payloads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::distributions::WeightedIndex;
use rand::prelude::*;
use risk_engine::format::round2;
use risk_engine::types::{
  AssessmentPayload, HealthStatus, RawAuthor, RawChangeMetadata, RawEnvironmentHealth, RawRequest,
};

const CRITICAL_FILES: &[&str] = &["src/critical/auth.py", "src/critical/data.py", "src/critical/cache.py"];
const MODULES: &[&str] = &["payment", "shipping", "user", "auth", "analytics"];
const STATUSES: &[HealthStatus] = &[HealthStatus::Healthy, HealthStatus::Degraded, HealthStatus::Critical];
const STATUS_WEIGHTS: &[f64] = &[0.6, 0.3, 0.1];

fn random_change(rng: &mut impl Rng) -> RawChangeMetadata {
  let module_file = format!("src/{}/module.py", MODULES.choose(rng).copied().unwrap_or("core"));
  let mut pool: Vec<String> = CRITICAL_FILES.iter().map(|f| f.to_string()).collect();
  pool.push(module_file);
  let count = rng.gen_range(1..=4);
  let files = (0..count).filter_map(|_| pool.choose(rng).cloned()).collect();

  RawChangeMetadata {
    lines_added: Some(rng.gen_range(5..=300)),
    lines_removed: Some(rng.gen_range(0..=120)),
    files_modified: Some(files),
    cyclomatic_complexity_delta: Some(round2(rng.gen_range(0.0..=3.5))),
  }
}

fn random_health(rng: &mut impl Rng) -> RawEnvironmentHealth {
  let status = match WeightedIndex::new(STATUS_WEIGHTS) {
    Ok(dist) => STATUSES[dist.sample(rng)],
    Err(_) => HealthStatus::Healthy,
  };
  let max_incidents = if status == HealthStatus::Healthy { 0 } else { 5 };
  RawEnvironmentHealth {
    status: Some(status),
    open_incidents: Some(rng.gen_range(0..=max_incidents)),
  }
}

/// One enveloped payload with every field populated.
pub fn payload(index: usize, rng: &mut impl Rng) -> AssessmentPayload {
  let suffix: u32 = rng.gen_range(0..0x100_0000);
  AssessmentPayload {
    request: RawRequest {
      commit_id: Some(format!("mock-{}-{:06x}", index, suffix)),
      author: Some(RawAuthor {
        id: Some(format!("synthetic-{}", rng.gen_range(1..=20))),
        domain_familiarity_score: Some(round2(rng.gen_range(0.25..=0.95))),
        past_success_rate: Some(round2(rng.gen_range(0.2..=0.98))),
      }),
      change_metadata: Some(random_change(rng)),
      environment_health: Some(random_health(rng)),
      security_scan_passed: None,
    },
    security_scan_passed: Some(rng.gen_ratio(2, 3)),
  }
}

/// Write `count` payloads as `mock_payload_<i>.json`, returning their paths.
pub fn generate(count: usize, out_dir: &Path, rng: &mut impl Rng) -> io::Result<Vec<PathBuf>> {
  fs::create_dir_all(out_dir)?;
  (0..count)
    .map(|index| {
      let path = out_dir.join(format!("mock_payload_{}.json", index));
      let json = serde_json::to_string_pretty(&payload(index, rng))?;
      fs::write(&path, json)?;
      Ok(path)
    })
    .collect()
}
