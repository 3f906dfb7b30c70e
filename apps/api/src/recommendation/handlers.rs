//! Axum route handlers for the Matching and Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scorer::MatchOutcome;
use crate::models::recommendation::{
    JobRecommendation, PreferencesUpdate, RecommendationPreferences, RecommendationStatus,
    SeekerProfileMatch,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreMatchRequest {
    pub seeker_id: String,
    pub job_offer_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ListRecommendationsQuery {
    #[serde(default)]
    pub filtered: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: RecommendationStatus,
}

#[derive(Debug, Serialize)]
pub struct RecommendationListResponse {
    pub recommendations: Vec<JobRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct ProfileMatchListResponse {
    pub matches: Vec<SeekerProfileMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one seeker against one job offer. Nothing is persisted.
pub async fn handle_score_match(
    State(state): State<AppState>,
    payload: Result<Json<ScoreMatchRequest>, JsonRejection>,
) -> Result<Json<MatchOutcome>, AppError> {
    let Json(request) = payload?;
    if request.seeker_id.trim().is_empty() || request.job_offer_id.trim().is_empty() {
        return Err(AppError::Validation(
            "seeker_id and job_offer_id are required".to_string(),
        ));
    }
    let outcome = state
        .recommendations
        .score_match(&request.seeker_id, &request.job_offer_id)
        .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/seekers/:id/recommendations
///
/// `?filtered=true` applies the seeker's preferences (minimum score, exclusions)
/// and sorts by score.
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
    Query(query): Query<ListRecommendationsQuery>,
) -> Result<Json<RecommendationListResponse>, AppError> {
    let recommendations = if query.filtered {
        state
            .recommendations
            .filtered_recommendations_for_seeker(&seeker_id)
            .await?
    } else {
        state
            .recommendations
            .recommendations_for_seeker(&seeker_id)
            .await?
    };
    Ok(Json(RecommendationListResponse { recommendations }))
}

/// POST /api/v1/seekers/:id/recommendations/generate
pub async fn handle_generate_recommendations(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
) -> Result<Json<RecommendationListResponse>, AppError> {
    let recommendations = state
        .recommendations
        .generate_recommendations_for_seeker(&seeker_id)
        .await?;
    Ok(Json(RecommendationListResponse { recommendations }))
}

/// PATCH /api/v1/recommendations/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Result<Json<JobRecommendation>, AppError> {
    let Json(request) = payload?;
    let updated = state
        .recommendations
        .update_recommendation_status(&id, request.status)
        .await?;
    Ok(Json(updated))
}

/// GET /api/v1/jobs/:id/matches
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Path(job_offer_id): Path<String>,
) -> Result<Json<ProfileMatchListResponse>, AppError> {
    let matches = state
        .recommendations
        .matching_profiles_for_job(&job_offer_id)
        .await?;
    Ok(Json(ProfileMatchListResponse { matches }))
}

/// POST /api/v1/jobs/:id/matches/generate
pub async fn handle_generate_matches(
    State(state): State<AppState>,
    Path(job_offer_id): Path<String>,
) -> Result<Json<ProfileMatchListResponse>, AppError> {
    let matches = state
        .recommendations
        .generate_matching_profiles_for_job(&job_offer_id)
        .await?;
    Ok(Json(ProfileMatchListResponse { matches }))
}

/// GET /api/v1/seekers/:id/recommendation-preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
) -> Result<Json<RecommendationPreferences>, AppError> {
    let preferences = state
        .recommendations
        .recommendation_preferences(&seeker_id)
        .await?;
    Ok(Json(preferences))
}

/// PATCH /api/v1/seekers/:id/recommendation-preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
    payload: Result<Json<PreferencesUpdate>, JsonRejection>,
) -> Result<Json<RecommendationPreferences>, AppError> {
    let Json(update) = payload?;
    let preferences = state
        .recommendations
        .update_recommendation_preferences(&seeker_id, &update)
        .await?;
    Ok(Json(preferences))
}
