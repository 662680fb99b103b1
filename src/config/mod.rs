pub mod advisor;
pub mod ai;

pub use advisor::{AdvisorConfig, AdvisorSection, AnalysisMode, CatalogSection};
pub use ai::AiConfig;
