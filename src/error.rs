//! Request-level errors. The scorers themselves never fail; these only gate them.

use thiserror::Error;

use crate::config::AnalysisMode;

/// Required form fields were left empty; nothing is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill out all required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("analysis mode `{0}` is not available in this build")]
    ModeUnavailable(AnalysisMode),
}
