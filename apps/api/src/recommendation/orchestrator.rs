//! Recommendation Orchestrator.
//!
//! Generation pass per seeker (or job):
//! 1. Resolve the seeker/job, NotFound otherwise.
//! 2. Split candidates into already-paired and new.
//! 3. Score each new candidate; persist a record when the score reaches
//!    `GENERATION_THRESHOLD`.
//! 4. Return existing ∪ created, unsorted.
//!
//! Repeated passes never duplicate a pair: the store's insert-if-absent is the
//! final arbiter, and a lost race triggers a re-read.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::{MatchOutcome, MatchScorer};
use crate::models::job_offer::JobOffer;
use crate::models::recommendation::{
    JobRecommendation, PreferencesUpdate, RecommendationPreferences, RecommendationStatus,
    SeekerProfileMatch,
};
use crate::models::seeker::JobSeekerProfile;
use crate::recommendation::preferences::{apply_update, filter_recommendations};
use crate::store::{JobOfferRepository, RecommendationRepository, SeekerRepository};

/// Minimum composite score for a generated record. Independent of the seeker's
/// `minimum_match_score`, which is only applied when listing.
pub const GENERATION_THRESHOLD: u32 = 60;

#[derive(Clone)]
pub struct RecommendationService {
    jobs: Arc<dyn JobOfferRepository>,
    seekers: Arc<dyn SeekerRepository>,
    records: Arc<dyn RecommendationRepository>,
    scorer: Arc<dyn MatchScorer>,
}

impl RecommendationService {
    pub fn new(
        jobs: Arc<dyn JobOfferRepository>,
        seekers: Arc<dyn SeekerRepository>,
        records: Arc<dyn RecommendationRepository>,
        scorer: Arc<dyn MatchScorer>,
    ) -> Self {
        Self {
            jobs,
            seekers,
            records,
            scorer,
        }
    }

    async fn require_seeker(&self, seeker_id: &str) -> Result<JobSeekerProfile, AppError> {
        self.seekers
            .job_seeker_by_id(seeker_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job seeker {seeker_id} not found")))
    }

    async fn require_job(&self, job_offer_id: &str) -> Result<JobOffer, AppError> {
        self.jobs
            .job_offer_by_id(job_offer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job offer {job_offer_id} not found")))
    }

    /// Scores a single pair without persisting anything.
    pub async fn score_match(
        &self,
        seeker_id: &str,
        job_offer_id: &str,
    ) -> Result<MatchOutcome, AppError> {
        let seeker = self.require_seeker(seeker_id).await?;
        let job = self.require_job(job_offer_id).await?;
        Ok(self.scorer.score(&seeker, &job))
    }

    pub async fn recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        self.require_seeker(seeker_id).await?;
        self.records.recommendations_for_seeker(seeker_id).await
    }

    /// Stored recommendations narrowed by the seeker's preferences.
    pub async fn filtered_recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        let recommendations = self.recommendations_for_seeker(seeker_id).await?;
        let preferences = self.recommendation_preferences(seeker_id).await?;
        Ok(filter_recommendations(recommendations, &preferences))
    }

    pub async fn generate_recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        let seeker = self.require_seeker(seeker_id).await?;
        let open_jobs: Vec<JobOffer> = self
            .jobs
            .job_offers()
            .await?
            .into_iter()
            .filter(JobOffer::is_open)
            .collect();

        let existing = self.records.recommendations_for_seeker(seeker_id).await?;
        let paired: HashSet<&str> = existing.iter().map(|r| r.job_offer_id.as_str()).collect();

        let mut created = Vec::new();
        let mut lost_race = false;
        let candidates = open_jobs.iter().filter(|job| !paired.contains(job.id.as_str()));

        for job in candidates {
            let outcome = self.scorer.score(&seeker, job);
            debug!(
                seeker_id,
                job_offer_id = %job.id,
                match_score = outcome.match_score,
                "Scored job offer"
            );
            if outcome.match_score < GENERATION_THRESHOLD {
                continue;
            }

            let now = Utc::now();
            let recommendation = JobRecommendation {
                id: Uuid::new_v4().to_string(),
                job_offer_id: job.id.clone(),
                seeker_id: seeker.id.clone(),
                match_score: outcome.match_score,
                match_reasons: outcome.reasons,
                status: RecommendationStatus::New,
                created_at: now,
                updated_at: now,
            };
            if self
                .records
                .insert_recommendation_if_absent(&recommendation)
                .await?
            {
                created.push(recommendation);
            } else {
                lost_race = true;
            }
        }

        info!(
            "Generated {} new recommendations for seeker {seeker_id} ({} open offers, {} already recommended)",
            created.len(),
            open_jobs.len(),
            existing.len()
        );

        if lost_race {
            return self.records.recommendations_for_seeker(seeker_id).await;
        }
        let mut all = existing;
        all.extend(created);
        Ok(all)
    }

    pub async fn matching_profiles_for_job(
        &self,
        job_offer_id: &str,
    ) -> Result<Vec<SeekerProfileMatch>, AppError> {
        self.require_job(job_offer_id).await?;
        self.records.matches_for_job(job_offer_id).await
    }

    pub async fn generate_matching_profiles_for_job(
        &self,
        job_offer_id: &str,
    ) -> Result<Vec<SeekerProfileMatch>, AppError> {
        let job = self.require_job(job_offer_id).await?;
        let seekers = self.seekers.job_seekers().await?;
        debug!(
            job_offer_id,
            job_status = job.status.as_str(),
            "Matching seeker profiles against job offer"
        );

        let existing = self.records.matches_for_job(job_offer_id).await?;
        let paired: HashSet<&str> = existing.iter().map(|m| m.seeker_id.as_str()).collect();

        let today = Utc::now().date_naive();
        let mut created = Vec::new();
        let mut lost_race = false;

        for seeker in seekers.iter().filter(|s| !paired.contains(s.id.as_str())) {
            let assessment = self.scorer.assess_profile(seeker, &job, today);
            debug!(
                job_offer_id,
                seeker_id = %seeker.id,
                match_score = assessment.match_score,
                "Scored seeker profile"
            );
            if assessment.match_score < GENERATION_THRESHOLD {
                continue;
            }

            let profile_match = SeekerProfileMatch {
                seeker_id: seeker.id.clone(),
                job_offer_id: job.id.clone(),
                match_score: assessment.match_score,
                skill_matches: assessment.skill_matches,
                experience_match: assessment.experience_match,
                location_match: assessment.location_match,
                salary_match: assessment.salary_match,
                created_at: Utc::now(),
            };
            if self.records.insert_match_if_absent(&profile_match).await? {
                created.push(profile_match);
            } else {
                lost_race = true;
            }
        }

        info!(
            "Generated {} new profile matches for job offer {job_offer_id} ({} seekers, {} already matched)",
            created.len(),
            seekers.len(),
            existing.len()
        );

        if lost_race {
            return self.records.matches_for_job(job_offer_id).await;
        }
        let mut all = existing;
        all.extend(created);
        Ok(all)
    }

    /// Overwrites status and `updated_at`. Any status is accepted from any status.
    pub async fn update_recommendation_status(
        &self,
        id: &str,
        status: RecommendationStatus,
    ) -> Result<JobRecommendation, AppError> {
        let updated = self
            .records
            .update_recommendation_status(id, status, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recommendation {id} not found")))?;
        info!("Recommendation {id} moved to {}", status.as_str());
        Ok(updated)
    }

    /// Stored preferences, or the defaults when the seeker has none yet.
    pub async fn recommendation_preferences(
        &self,
        seeker_id: &str,
    ) -> Result<RecommendationPreferences, AppError> {
        self.require_seeker(seeker_id).await?;
        Ok(self
            .records
            .preferences(seeker_id)
            .await?
            .unwrap_or_else(|| RecommendationPreferences::defaults_for(seeker_id, Utc::now())))
    }

    pub async fn update_recommendation_preferences(
        &self,
        seeker_id: &str,
        update: &PreferencesUpdate,
    ) -> Result<RecommendationPreferences, AppError> {
        let current = self.recommendation_preferences(seeker_id).await?;
        let merged = apply_update(current, update, Utc::now())?;
        self.records.save_preferences(&merged).await?;
        Ok(merged)
    }
}
