//! Repository seams consumed by the recommendation service.
//!
//! `insert_*_if_absent` are atomic per (seeker_id, job_offer_id): a caller that
//! loses a race gets `false` and no second record is written.

pub mod demo;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::models::job_offer::JobOffer;
use crate::models::recommendation::{
    JobRecommendation, RecommendationPreferences, RecommendationStatus, SeekerProfileMatch,
};
use crate::models::seeker::JobSeekerProfile;

#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    async fn job_offers(&self) -> Result<Vec<JobOffer>, AppError>;
    async fn job_offer_by_id(&self, id: &str) -> Result<Option<JobOffer>, AppError>;
}

#[async_trait]
pub trait SeekerRepository: Send + Sync {
    async fn job_seekers(&self) -> Result<Vec<JobSeekerProfile>, AppError>;
    async fn job_seeker_by_id(&self, id: &str) -> Result<Option<JobSeekerProfile>, AppError>;
}

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError>;

    async fn insert_recommendation_if_absent(
        &self,
        recommendation: &JobRecommendation,
    ) -> Result<bool, AppError>;

    async fn update_recommendation_status(
        &self,
        id: &str,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<JobRecommendation>, AppError>;

    async fn matches_for_job(&self, job_offer_id: &str)
        -> Result<Vec<SeekerProfileMatch>, AppError>;

    async fn insert_match_if_absent(&self, profile_match: &SeekerProfileMatch)
        -> Result<bool, AppError>;

    async fn preferences(
        &self,
        seeker_id: &str,
    ) -> Result<Option<RecommendationPreferences>, AppError>;

    async fn save_preferences(&self, preferences: &RecommendationPreferences)
        -> Result<(), AppError>;
}
