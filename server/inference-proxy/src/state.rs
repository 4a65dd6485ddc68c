//! Shared, read-only application state.

use risk_engine::{ContextEnricher, Engine};

#[derive(Debug, Clone, Default)]
pub struct AppState {
  pub engine: Engine,
  pub enricher: ContextEnricher,
}

impl AppState {
  pub fn new(engine: Engine, enricher: ContextEnricher) -> Self {
    Self { engine, enricher }
  }
}
