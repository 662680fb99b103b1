//! Prometheus counters per panel plus the `/metrics` route.
//!
//! The counter helpers are plain `metrics` macros: without an installed recorder they are
//! no-ops, so the library and tests never need `Metrics::init`.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::submission::Panel;

pub const SUBMISSIONS_TOTAL: &str = "advisor_submissions_total";
pub const FALLBACK_TOTAL: &str = "advisor_fallback_total";
pub const VALIDATION_REJECTIONS_TOTAL: &str = "advisor_validation_rejections_total";
pub const SIMULATED_DELAY_MS: &str = "advisor_simulated_delay_ms";

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once per process) and publish the configured delay.
    pub fn init(delay_ms: u64) -> Result<Self> {
        let handle = HANDLE
            .get_or_try_init(|| {
                PrometheusBuilder::new()
                    .install_recorder()
                    .context("prometheus: install recorder")
            })?
            .clone();

        gauge!(SIMULATED_DELAY_MS).set(delay_ms as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_submission(panel: Panel) {
    counter!(SUBMISSIONS_TOTAL, "panel" => panel.as_str()).increment(1);
}

pub fn record_rejection(panel: Panel) {
    counter!(VALIDATION_REJECTIONS_TOTAL, "panel" => panel.as_str()).increment(1);
}

/// Counted when a panel answers from generic templates or the brand price tier.
pub fn record_fallback(panel: Panel) {
    counter!(FALLBACK_TOTAL, "panel" => panel.as_str()).increment(1);
}
