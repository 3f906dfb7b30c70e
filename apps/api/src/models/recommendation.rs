use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchReasonType {
    Skill,
    Location,
    Experience,
    Education,
    Industry,
    JobType,
    Salary,
}

/// One human-readable explanation attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReason {
    #[serde(rename = "type")]
    pub reason_type: MatchReasonType,
    pub score: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    New,
    Viewed,
    Saved,
    Applied,
    Dismissed,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::New => "NEW",
            RecommendationStatus::Viewed => "VIEWED",
            RecommendationStatus::Saved => "SAVED",
            RecommendationStatus::Applied => "APPLIED",
            RecommendationStatus::Dismissed => "DISMISSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEW" => Some(RecommendationStatus::New),
            "VIEWED" => Some(RecommendationStatus::Viewed),
            "SAVED" => Some(RecommendationStatus::Saved),
            "APPLIED" => Some(RecommendationStatus::Applied),
            "DISMISSED" => Some(RecommendationStatus::Dismissed),
            _ => None,
        }
    }
}

/// A job offer suggested to a seeker. At most one per (seeker_id, job_offer_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub id: String,
    pub job_offer_id: String,
    pub seeker_id: String,
    pub match_score: u32,
    pub match_reasons: Vec<MatchReason>,
    pub status: RecommendationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub relevance: u32,
}

/// A seeker suggested to a job offer. At most one per (seeker_id, job_offer_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerProfileMatch {
    pub seeker_id: String,
    pub job_offer_id: String,
    pub match_score: u32,
    pub skill_matches: Vec<SkillMatch>,
    pub experience_match: u32,
    pub location_match: u32,
    pub salary_match: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPreferences {
    pub seeker_id: String,
    // Stored and returned, not yet consulted by the weighting.
    pub prioritize_skills: bool,
    pub prioritize_location: bool,
    pub prioritize_salary: bool,
    pub exclude_applied_jobs: bool,
    pub exclude_rejected_jobs: bool,
    pub minimum_match_score: u32,
    pub updated_at: DateTime<Utc>,
}

impl RecommendationPreferences {
    pub fn defaults_for(seeker_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            seeker_id: seeker_id.to_string(),
            prioritize_skills: true,
            prioritize_location: true,
            prioritize_salary: false,
            exclude_applied_jobs: true,
            exclude_rejected_jobs: true,
            minimum_match_score: 60,
            updated_at: now,
        }
    }
}

/// Partial update payload; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesUpdate {
    pub prioritize_skills: Option<bool>,
    pub prioritize_location: Option<bool>,
    pub prioritize_salary: Option<bool>,
    pub exclude_applied_jobs: Option<bool>,
    pub exclude_rejected_jobs: Option<bool>,
    pub minimum_match_score: Option<i64>,
}
