//! PostgreSQL store. Pair uniqueness is enforced by the schema and
//! `ON CONFLICT DO NOTHING`, so concurrent generation passes cannot duplicate.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::errors::AppError;
use crate::models::job_offer::{EmploymentType, JobOffer, JobOfferStatus, SalaryRange};
use crate::models::recommendation::{
    JobRecommendation, MatchReason, RecommendationPreferences, RecommendationStatus,
    SeekerProfileMatch, SkillMatch,
};
use crate::models::seeker::{JobPreferences, JobSeekerProfile, WorkExperience};
use crate::store::{JobOfferRepository, RecommendationRepository, SeekerRepository};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobOfferRow {
    id: String,
    title: String,
    company: String,
    location: String,
    description: String,
    requirements: Vec<String>,
    responsibilities: Vec<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    salary_currency: Option<String>,
    employment_type: String,
    remote: bool,
    status: String,
}

impl TryFrom<JobOfferRow> for JobOffer {
    type Error = AppError;

    fn try_from(row: JobOfferRow) -> Result<Self, Self::Error> {
        let employment_type = EmploymentType::parse(&row.employment_type).ok_or_else(|| {
            anyhow!("job offer {} has unknown employment type '{}'", row.id, row.employment_type)
        })?;
        let status = JobOfferStatus::parse(&row.status)
            .ok_or_else(|| anyhow!("job offer {} has unknown status '{}'", row.id, row.status))?;
        // Figures without a currency cannot be compared against anything.
        let salary = row.salary_currency.map(|currency| SalaryRange {
            min: row.salary_min,
            max: row.salary_max,
            currency,
        });
        Ok(JobOffer {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            requirements: row.requirements,
            responsibilities: row.responsibilities,
            salary,
            employment_type,
            remote: row.remote,
            status,
        })
    }
}

#[derive(Debug, FromRow)]
struct JobSeekerRow {
    id: String,
    full_name: String,
    title: String,
    skills: Vec<String>,
    experience: Json<Vec<WorkExperience>>,
    preferences: Json<JobPreferences>,
}

impl From<JobSeekerRow> for JobSeekerProfile {
    fn from(row: JobSeekerRow) -> Self {
        JobSeekerProfile {
            id: row.id,
            full_name: row.full_name,
            title: row.title,
            skills: row.skills,
            experience: row.experience.0,
            preferences: row.preferences.0,
        }
    }
}

#[derive(Debug, FromRow)]
struct RecommendationRow {
    id: String,
    job_offer_id: String,
    seeker_id: String,
    match_score: i32,
    match_reasons: Json<Vec<MatchReason>>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecommendationRow> for JobRecommendation {
    type Error = AppError;

    fn try_from(row: RecommendationRow) -> Result<Self, Self::Error> {
        let status = RecommendationStatus::parse(&row.status).ok_or_else(|| {
            anyhow!("recommendation {} has unknown status '{}'", row.id, row.status)
        })?;
        Ok(JobRecommendation {
            id: row.id,
            job_offer_id: row.job_offer_id,
            seeker_id: row.seeker_id,
            match_score: to_score(row.match_score),
            match_reasons: row.match_reasons.0,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileMatchRow {
    seeker_id: String,
    job_offer_id: String,
    match_score: i32,
    skill_matches: Json<Vec<SkillMatch>>,
    experience_match: i32,
    location_match: i32,
    salary_match: i32,
    created_at: DateTime<Utc>,
}

impl From<ProfileMatchRow> for SeekerProfileMatch {
    fn from(row: ProfileMatchRow) -> Self {
        SeekerProfileMatch {
            seeker_id: row.seeker_id,
            job_offer_id: row.job_offer_id,
            match_score: to_score(row.match_score),
            skill_matches: row.skill_matches.0,
            experience_match: to_score(row.experience_match),
            location_match: to_score(row.location_match),
            salary_match: to_score(row.salary_match),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct PreferencesRow {
    seeker_id: String,
    prioritize_skills: bool,
    prioritize_location: bool,
    prioritize_salary: bool,
    exclude_applied_jobs: bool,
    exclude_rejected_jobs: bool,
    minimum_match_score: i32,
    updated_at: DateTime<Utc>,
}

impl From<PreferencesRow> for RecommendationPreferences {
    fn from(row: PreferencesRow) -> Self {
        RecommendationPreferences {
            seeker_id: row.seeker_id,
            prioritize_skills: row.prioritize_skills,
            prioritize_location: row.prioritize_location,
            prioritize_salary: row.prioritize_salary,
            exclude_applied_jobs: row.exclude_applied_jobs,
            exclude_rejected_jobs: row.exclude_rejected_jobs,
            minimum_match_score: to_score(row.minimum_match_score),
            updated_at: row.updated_at,
        }
    }
}

fn to_score(value: i32) -> u32 {
    value.clamp(0, 100) as u32
}

#[async_trait]
impl JobOfferRepository for PgStore {
    async fn job_offers(&self) -> Result<Vec<JobOffer>, AppError> {
        let rows = sqlx::query_as::<_, JobOfferRow>("SELECT * FROM job_offers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(JobOffer::try_from).collect()
    }

    async fn job_offer_by_id(&self, id: &str) -> Result<Option<JobOffer>, AppError> {
        sqlx::query_as::<_, JobOfferRow>("SELECT * FROM job_offers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(JobOffer::try_from)
            .transpose()
    }
}

#[async_trait]
impl SeekerRepository for PgStore {
    async fn job_seekers(&self) -> Result<Vec<JobSeekerProfile>, AppError> {
        let rows = sqlx::query_as::<_, JobSeekerRow>("SELECT * FROM job_seekers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(JobSeekerProfile::from).collect())
    }

    async fn job_seeker_by_id(&self, id: &str) -> Result<Option<JobSeekerProfile>, AppError> {
        let row = sqlx::query_as::<_, JobSeekerRow>("SELECT * FROM job_seekers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(JobSeekerProfile::from))
    }
}

#[async_trait]
impl RecommendationRepository for PgStore {
    async fn recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        let rows = sqlx::query_as::<_, RecommendationRow>(
            "SELECT * FROM job_recommendations WHERE seeker_id = $1 ORDER BY created_at, id",
        )
        .bind(seeker_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(JobRecommendation::try_from).collect()
    }

    async fn insert_recommendation_if_absent(
        &self,
        recommendation: &JobRecommendation,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO job_recommendations
                (id, job_offer_id, seeker_id, match_score, match_reasons, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (seeker_id, job_offer_id) DO NOTHING
            "#,
        )
        .bind(&recommendation.id)
        .bind(&recommendation.job_offer_id)
        .bind(&recommendation.seeker_id)
        .bind(recommendation.match_score as i32)
        .bind(Json(&recommendation.match_reasons))
        .bind(recommendation.status.as_str())
        .bind(recommendation.created_at)
        .bind(recommendation.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn update_recommendation_status(
        &self,
        id: &str,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<JobRecommendation>, AppError> {
        sqlx::query_as::<_, RecommendationRow>(
            "UPDATE job_recommendations SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status.as_str())
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(JobRecommendation::try_from)
        .transpose()
    }

    async fn matches_for_job(
        &self,
        job_offer_id: &str,
    ) -> Result<Vec<SeekerProfileMatch>, AppError> {
        let rows = sqlx::query_as::<_, ProfileMatchRow>(
            "SELECT * FROM seeker_profile_matches WHERE job_offer_id = $1 ORDER BY created_at, seeker_id",
        )
        .bind(job_offer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(SeekerProfileMatch::from).collect())
    }

    async fn insert_match_if_absent(
        &self,
        profile_match: &SeekerProfileMatch,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO seeker_profile_matches
                (seeker_id, job_offer_id, match_score, skill_matches,
                 experience_match, location_match, salary_match, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (seeker_id, job_offer_id) DO NOTHING
            "#,
        )
        .bind(&profile_match.seeker_id)
        .bind(&profile_match.job_offer_id)
        .bind(profile_match.match_score as i32)
        .bind(Json(&profile_match.skill_matches))
        .bind(profile_match.experience_match as i32)
        .bind(profile_match.location_match as i32)
        .bind(profile_match.salary_match as i32)
        .bind(profile_match.created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn preferences(
        &self,
        seeker_id: &str,
    ) -> Result<Option<RecommendationPreferences>, AppError> {
        let row = sqlx::query_as::<_, PreferencesRow>(
            "SELECT * FROM recommendation_preferences WHERE seeker_id = $1",
        )
        .bind(seeker_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(RecommendationPreferences::from))
    }

    async fn save_preferences(
        &self,
        preferences: &RecommendationPreferences,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO recommendation_preferences
                (seeker_id, prioritize_skills, prioritize_location, prioritize_salary,
                 exclude_applied_jobs, exclude_rejected_jobs, minimum_match_score, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (seeker_id) DO UPDATE SET
                prioritize_skills     = EXCLUDED.prioritize_skills,
                prioritize_location   = EXCLUDED.prioritize_location,
                prioritize_salary     = EXCLUDED.prioritize_salary,
                exclude_applied_jobs  = EXCLUDED.exclude_applied_jobs,
                exclude_rejected_jobs = EXCLUDED.exclude_rejected_jobs,
                minimum_match_score   = EXCLUDED.minimum_match_score,
                updated_at            = EXCLUDED.updated_at
            "#,
        )
        .bind(&preferences.seeker_id)
        .bind(preferences.prioritize_skills)
        .bind(preferences.prioritize_location)
        .bind(preferences.prioritize_salary)
        .bind(preferences.exclude_applied_jobs)
        .bind(preferences.exclude_rejected_jobs)
        .bind(preferences.minimum_match_score as i32)
        .bind(preferences.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
