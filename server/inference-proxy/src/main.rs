//! Binary entrypoint for the inference proxy.

use std::sync::Arc;

use inference_proxy::{create_router, AppState, ProxyConfig};
use risk_engine::{ContextEnricher, Engine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  risk_engine::init_tracing();

  let config = ProxyConfig::from_env()?;
  let enricher = ContextEnricher::new(config.repo_path.clone()).with_history_days(config.history_days);
  let state = Arc::new(AppState::new(Engine::with_defaults(), enricher));
  let app = create_router(state);

  let addr = config.socket_addr();
  tracing::info!(%addr, repo = %config.repo_path.display(), "inference-proxy listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
