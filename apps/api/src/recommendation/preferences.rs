//! Per-seeker recommendation preferences and the query-time filter that
//! applies them. The generation threshold does not consult these.

use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::models::recommendation::{
    JobRecommendation, PreferencesUpdate, RecommendationPreferences, RecommendationStatus,
};

/// Merges a partial update over `current`. Out-of-range scores are rejected,
/// never clamped.
pub fn apply_update(
    current: RecommendationPreferences,
    update: &PreferencesUpdate,
    now: DateTime<Utc>,
) -> Result<RecommendationPreferences, AppError> {
    let minimum_match_score = match update.minimum_match_score {
        Some(score) if !(0..=100).contains(&score) => {
            return Err(AppError::Validation(format!(
                "minimum_match_score must be between 0 and 100, got {score}"
            )));
        }
        Some(score) => score as u32,
        None => current.minimum_match_score,
    };

    Ok(RecommendationPreferences {
        seeker_id: current.seeker_id,
        prioritize_skills: update.prioritize_skills.unwrap_or(current.prioritize_skills),
        prioritize_location: update
            .prioritize_location
            .unwrap_or(current.prioritize_location),
        prioritize_salary: update.prioritize_salary.unwrap_or(current.prioritize_salary),
        exclude_applied_jobs: update
            .exclude_applied_jobs
            .unwrap_or(current.exclude_applied_jobs),
        exclude_rejected_jobs: update
            .exclude_rejected_jobs
            .unwrap_or(current.exclude_rejected_jobs),
        minimum_match_score,
        updated_at: now,
    })
}

/// Caller-side view of a seeker's recommendations: drops records under the
/// minimum score, drops APPLIED / DISMISSED per the exclusion flags, and sorts
/// by score descending.
pub fn filter_recommendations(
    mut recommendations: Vec<JobRecommendation>,
    preferences: &RecommendationPreferences,
) -> Vec<JobRecommendation> {
    recommendations.retain(|rec| {
        rec.match_score >= preferences.minimum_match_score
            && !(preferences.exclude_applied_jobs && rec.status == RecommendationStatus::Applied)
            && !(preferences.exclude_rejected_jobs
                && rec.status == RecommendationStatus::Dismissed)
    });
    recommendations.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    recommendations
}
