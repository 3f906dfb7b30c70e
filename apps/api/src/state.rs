use crate::config::Config;
use crate::recommendation::orchestrator::RecommendationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Matching engine plus the repositories it reads and writes.
    pub recommendations: RecommendationService,
}
