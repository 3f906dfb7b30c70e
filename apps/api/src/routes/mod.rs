pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching
        .route("/api/v1/match/score", post(handlers::handle_score_match))
        // Seeker-facing recommendations
        .route(
            "/api/v1/seekers/:id/recommendations",
            get(handlers::handle_list_recommendations),
        )
        .route(
            "/api/v1/seekers/:id/recommendations/generate",
            post(handlers::handle_generate_recommendations),
        )
        .route(
            "/api/v1/recommendations/:id/status",
            patch(handlers::handle_update_status),
        )
        .route(
            "/api/v1/seekers/:id/recommendation-preferences",
            get(handlers::handle_get_preferences).patch(handlers::handle_update_preferences),
        )
        // Job-facing profile matches
        .route("/api/v1/jobs/:id/matches", get(handlers::handle_list_matches))
        .route(
            "/api/v1/jobs/:id/matches/generate",
            post(handlers::handle_generate_matches),
        )
        .with_state(state)
}
