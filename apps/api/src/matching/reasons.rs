//! Reason Generator — one templated explanation per evaluated dimension.
//!
//! Order is SKILL, LOCATION, JOB_TYPE, SALARY. The skill reason is omitted when
//! nothing matched; the salary reason is omitted when either side has no
//! salary data. Location and job type are always explained, even at 0.

use std::collections::BTreeSet;

use crate::matching::dimensions::{
    job_type_score, matching_skills, salary_comparable, salary_score, LocationFit,
};
use crate::models::job_offer::JobOffer;
use crate::models::recommendation::{MatchReason, MatchReasonType};
use crate::models::seeker::JobSeekerProfile;

const MAX_LISTED_SKILLS: usize = 4;

pub fn generate_match_reasons(
    seeker: &JobSeekerProfile,
    job: &JobOffer,
    job_skills: &BTreeSet<String>,
) -> Vec<MatchReason> {
    let mut reasons = Vec::with_capacity(4);

    if let Some(reason) = skill_reason(seeker, job_skills) {
        reasons.push(reason);
    }
    reasons.push(location_reason(seeker, job));
    reasons.push(job_type_reason(seeker, job));
    if salary_comparable(seeker, job) {
        reasons.push(salary_reason(salary_score(seeker, job)));
    }

    reasons
}

fn skill_reason(seeker: &JobSeekerProfile, job_skills: &BTreeSet<String>) -> Option<MatchReason> {
    let matching = matching_skills(seeker, job_skills);
    if matching.is_empty() {
        return None;
    }

    let seeker_skill_count = seeker
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .len();
    // matching is non-empty, so job_skills is too
    let denominator = seeker_skill_count.max(job_skills.len()) as f64;
    let score = (matching.len() as f64 / denominator * 100.0)
        .round()
        .min(100.0) as u32;

    let listed = matching
        .iter()
        .take(MAX_LISTED_SKILLS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let ellipsis = if matching.len() > MAX_LISTED_SKILLS { "..." } else { "" };

    Some(MatchReason {
        reason_type: MatchReasonType::Skill,
        score,
        description: format!(
            "You have {} matching skills: {listed}{ellipsis}",
            matching.len()
        ),
    })
}

fn location_reason(seeker: &JobSeekerProfile, job: &JobOffer) -> MatchReason {
    let fit = LocationFit::evaluate(seeker, job);
    let description = match fit {
        LocationFit::RemoteMatch => "Remote job matches your preference for remote work".to_string(),
        LocationFit::RemoteOption => "Job offers remote work option".to_string(),
        LocationFit::OnSiteForRemoteOnly => {
            "On-site job does not match your preference for remote work".to_string()
        }
        LocationFit::PreferredLocation => format!("{} is in your preferred locations", job.location),
        LocationFit::WillingToRelocate => format!(
            "{} is not in your preferred locations, but you are willing to relocate",
            job.location
        ),
        LocationFit::OutsidePreferred => {
            format!("{} is not in your preferred locations", job.location)
        }
    };
    MatchReason {
        reason_type: MatchReasonType::Location,
        score: fit.score().round() as u32,
        description,
    }
}

fn job_type_reason(seeker: &JobSeekerProfile, job: &JobOffer) -> MatchReason {
    let score = job_type_score(seeker, job);
    let label = job.employment_type.label();
    let description = if score > 0.0 {
        format!("{label} position matches your preference")
    } else {
        format!("{label} position does not match your preferences")
    };
    MatchReason {
        reason_type: MatchReasonType::JobType,
        score: score.round() as u32,
        description,
    }
}

fn salary_reason(score: f64) -> MatchReason {
    let description = if score >= 80.0 {
        "Salary range matches your expectations"
    } else if score >= 50.0 {
        "Salary range partially matches your expectations"
    } else {
        "Salary range does not match your expectations"
    };
    MatchReason {
        reason_type: MatchReasonType::Salary,
        score: score.round() as u32,
        description: description.to_string(),
    }
}
