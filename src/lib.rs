// src/lib.rs
// Public library surface for the binary, the demo and integration tests.

pub mod analyze;
pub mod api;
pub mod catalog;
pub mod condition;
pub mod config;
pub mod error;
pub mod metrics;
pub mod random;
pub mod submission;
pub mod telemetry;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyze::Advisor;
pub use crate::api::{router, AppState};
pub use crate::catalog::Catalogs;
pub use crate::config::{AdvisorConfig, AnalysisMode};
pub use crate::error::{AdvisorError, ValidationError};
pub use crate::random::{RandomFactory, RandomSource, SeededRandom};

use axum::Router;
use tracing::info;

/// Full service router: config from the environment, panel routes and `/metrics`.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = AdvisorConfig::from_env()?;
    let state = AppState::from_config(&cfg)?;
    let metrics = metrics::Metrics::init(cfg.advisor.simulated_delay_ms)?;

    info!(
        target: "advisor",
        mode = %cfg.advisor.mode,
        delay_ms = cfg.advisor.simulated_delay_ms,
        seeded = cfg.advisor.seed.is_some(),
        ai_enhanced = state.advisor.ai_available(),
        "advisor ready"
    );

    Ok(router(state).merge(metrics.router()))
}
