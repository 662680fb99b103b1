// src/analyze/mod.rs
//! Analysis entry: validates a submission, then hands it to the panel's scorer.
//!
//! `Advisor` owns the shared catalogs and the configured mode. Every method follows the
//! same order: validate required fields, check the mode, score, count fallbacks.

pub mod authenticity;
pub mod resale;
pub mod styling;

use std::sync::Arc;
use tracing::warn;

use crate::catalog::Catalogs;
use crate::config::AnalysisMode;
use crate::error::AdvisorError;
use crate::metrics;
use crate::random::RandomSource;
use crate::submission::{
    AuthenticitySubmission, Panel, ResaleSubmission, StylingSubmission, Submission,
};

// Re-export convenient types.
pub use authenticity::{AuthenticityReport, AuthenticityScorer, ConfidenceTier};
pub use resale::{market_tips, ResaleEstimate, ResaleEstimator};
pub use styling::{
    Occasion, Season, StyleCategory, StylingRecommender, StylingSource, StylingSuggestions,
};

#[derive(Debug, Clone)]
pub struct Advisor {
    catalogs: Arc<Catalogs>,
    mode: AnalysisMode,
    ai_available: bool,
}

impl Advisor {
    pub fn new(catalogs: Arc<Catalogs>, mode: AnalysisMode) -> Self {
        Self {
            catalogs,
            mode,
            ai_available: false,
        }
    }

    /// Marks responses as AI-enhanced. Cosmetic only: scoring is unchanged.
    pub fn with_ai_available(mut self, available: bool) -> Self {
        self.ai_available = available;
        self
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn ai_available(&self) -> bool {
        self.ai_available
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn authenticity(
        &self,
        sub: &AuthenticitySubmission,
        rng: &mut dyn RandomSource,
    ) -> Result<AuthenticityReport, AdvisorError> {
        self.admit(sub)?;
        let report = AuthenticityScorer::new(&self.catalogs.reference).score(
            &sub.brand,
            &sub.title,
            &sub.description,
            &sub.condition,
            rng,
        );
        if report.is_generic() {
            metrics::record_fallback(Panel::Authenticity);
        }
        Ok(report)
    }

    pub fn styling(
        &self,
        sub: &StylingSubmission,
        rng: &mut dyn RandomSource,
    ) -> Result<StylingSuggestions, AdvisorError> {
        self.admit(sub)?;
        let out = StylingRecommender::new(&self.catalogs.styling).suggest(
            &sub.item_name,
            sub.context.as_deref(),
            rng,
        );
        if matches!(out.source, StylingSource::Generic { .. }) {
            metrics::record_fallback(Panel::Styling);
        }
        Ok(out)
    }

    pub fn resale(
        &self,
        sub: &ResaleSubmission,
        rng: &mut dyn RandomSource,
    ) -> Result<ResaleEstimate, AdvisorError> {
        self.admit(sub)?;
        let est = ResaleEstimator::new(&self.catalogs.resale).estimate(
            &sub.brand,
            &sub.item_name,
            &sub.condition,
            rng,
        );
        if est.matched_model.is_none() {
            metrics::record_fallback(Panel::Resale);
        }
        Ok(est)
    }

    fn admit<S: Submission>(&self, sub: &S) -> Result<(), AdvisorError> {
        metrics::record_submission(S::PANEL);
        if let Err(e) = sub.validate() {
            metrics::record_rejection(S::PANEL);
            warn!(target: "advisor", panel = %S::PANEL, missing = ?e.missing, "rejected submission");
            return Err(e.into());
        }
        if self.mode != AnalysisMode::Heuristic {
            warn!(target: "advisor", panel = %S::PANEL, mode = %self.mode, "mode not available");
            return Err(AdvisorError::ModeUnavailable(self.mode));
        }
        Ok(())
    }
}
