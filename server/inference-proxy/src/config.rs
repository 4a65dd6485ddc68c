//! Proxy configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var} must be {expected}, got {value:?}")]
  Invalid {
    var: &'static str,
    expected: &'static str,
    value: String,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// Repository the enricher reads author history from.
  pub repo_path: PathBuf,
  pub history_days: i64,
}

impl Default for ProxyConfig {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 8001,
      repo_path: PathBuf::from("."),
      history_days: 90,
    }
  }
}

impl ProxyConfig {
  /// Read `BIND_ADDR`, `PORT`, `REPO_PATH`, `HISTORY_DAYS`; unset means default.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| std::env::var(var).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    if let Some(v) = lookup("BIND_ADDR") {
      config.bind_addr = parse("BIND_ADDR", "an IP address", v)?;
    }
    if let Some(v) = lookup("PORT") {
      config.port = parse("PORT", "a valid u16", v)?;
    }
    if let Some(v) = lookup("REPO_PATH") {
      config.repo_path = PathBuf::from(v);
    }
    if let Some(v) = lookup("HISTORY_DAYS") {
      config.history_days = parse("HISTORY_DAYS", "a whole number of days", v)?;
      if config.history_days < 0 {
        return Err(ConfigError::Invalid {
          var: "HISTORY_DAYS",
          expected: "a whole number of days",
          value: config.history_days.to_string(),
        });
      }
    }
    Ok(config)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }
}

fn parse<T: std::str::FromStr>(
  var: &'static str,
  expected: &'static str,
  value: String,
) -> Result<T, ConfigError> {
  value
    .trim()
    .parse()
    .map_err(|_| ConfigError::Invalid { var, expected, value })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |var| map.get(var).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let config = ProxyConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ProxyConfig::default());
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8001");
  }

  #[test]
  fn reads_overrides() {
    let config = ProxyConfig::from_lookup(lookup(&[
      ("PORT", "9000"),
      ("BIND_ADDR", "0.0.0.0"),
      ("REPO_PATH", "/srv/repo"),
      ("HISTORY_DAYS", "30"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
    assert_eq!(config.repo_path, PathBuf::from("/srv/repo"));
    assert_eq!(config.history_days, 30);
  }

  #[test]
  fn bad_port_fails_fast() {
    let err = ProxyConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));
  }

  #[test]
  fn negative_history_is_rejected() {
    assert!(ProxyConfig::from_lookup(lookup(&[("HISTORY_DAYS", "-1")])).is_err());
  }
}
