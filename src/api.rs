// src/api.rs
//! JSON endpoints, one per advisor panel.
//!
//! Each handler: score with a fresh random source, sleep the simulated processing delay,
//! answer with the result plus `mode` / `ai_enhanced`. Empty required fields answer 422
//! immediately; the unimplemented AI mode answers 501.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analyze::{
    Advisor, AuthenticityReport, ResaleEstimate, StylingSource, StylingSuggestions,
};
use crate::catalog::Catalogs;
use crate::config::{AdvisorConfig, AnalysisMode};
use crate::error::AdvisorError;
use crate::random::RandomFactory;
use crate::submission::{AuthenticitySubmission, ResaleSubmission, StylingSubmission, Submission};
use crate::telemetry::anon_hash;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
    pub rng: RandomFactory,
    pub delay: Duration,
}

impl AppState {
    pub fn new(advisor: Advisor, rng: RandomFactory, delay: Duration) -> Self {
        Self {
            advisor: Arc::new(advisor),
            rng,
            delay,
        }
    }

    /// Load catalogs and wire the advisor from a resolved config.
    pub fn from_config(cfg: &AdvisorConfig) -> Result<Self> {
        let catalogs = Catalogs::load(cfg.catalogs.dir.as_deref())?;
        let advisor = Advisor::new(Arc::new(catalogs), cfg.advisor.mode)
            .with_ai_available(cfg.ai.available());
        Ok(Self::new(
            advisor,
            RandomFactory::new(cfg.advisor.seed),
            Duration::from_millis(cfg.advisor.simulated_delay_ms),
        ))
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn respond<T: Serialize + std::fmt::Display>(&self, result: T) -> Json<PanelResponse<T>> {
        Json(PanelResponse {
            summary: result.to_string(),
            result,
            mode: self.advisor.mode(),
            ai_enhanced: self.advisor.ai_available(),
            analyzed_at: Utc::now(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/authenticity", post(authenticity))
        .route("/styling", post(styling))
        .route("/resale", post(resale))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Panel result flattened next to the response metadata.
#[derive(Debug, Serialize)]
pub struct PanelResponse<T> {
    #[serde(flatten)]
    pub result: T,
    /// Plain-text rendering of the panel.
    pub summary: String,
    pub mode: AnalysisMode,
    pub ai_enhanced: bool,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ApiError(AdvisorError);

impl From<AdvisorError> for ApiError {
    fn from(e: AdvisorError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            AdvisorError::Invalid(v) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "warning": v.to_string(), "missing": v.missing })),
            )
                .into_response(),
            AdvisorError::ModeUnavailable(_) => (
                StatusCode::NOT_IMPLEMENTED,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response(),
        }
    }
}

fn log_scored<S: Submission>(sub: &S, outcome: &str) {
    let id = anon_hash(&sub.fingerprint());
    info!(target: "advisor", %id, panel = %S::PANEL, outcome, "scored submission");
}

async fn authenticity(
    State(state): State<AppState>,
    Json(sub): Json<AuthenticitySubmission>,
) -> Result<Json<PanelResponse<AuthenticityReport>>, ApiError> {
    let report = state
        .advisor
        .authenticity(&sub, &mut state.rng.fresh())?;
    log_scored(&sub, report.tier.as_str());
    state.pause().await;
    Ok(state.respond(report))
}

async fn styling(
    State(state): State<AppState>,
    Json(sub): Json<StylingSubmission>,
) -> Result<Json<PanelResponse<StylingSuggestions>>, ApiError> {
    let looks = state.advisor.styling(&sub, &mut state.rng.fresh())?;
    log_scored(&sub, source_label(&looks));
    state.pause().await;
    Ok(state.respond(looks))
}

async fn resale(
    State(state): State<AppState>,
    Json(sub): Json<ResaleSubmission>,
) -> Result<Json<PanelResponse<ResaleEstimate>>, ApiError> {
    let est = state.advisor.resale(&sub, &mut state.rng.fresh())?;
    log_scored(&sub, est.trend.as_str());
    state.pause().await;
    Ok(state.respond(est))
}

fn source_label(s: &StylingSuggestions) -> &'static str {
    match s.source {
        StylingSource::Catalog { .. } => "catalog",
        StylingSource::Generic { .. } => "generic",
    }
}
