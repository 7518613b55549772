use crate::analysis::pipeline::RecommendationPipeline;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Extractors and sink behind trait objects. Default: PDF text, rule-based
    /// fields, Postgres sink.
    pub pipeline: RecommendationPipeline,
}
