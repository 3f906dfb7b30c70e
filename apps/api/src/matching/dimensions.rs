//! Dimension scorers. Each returns a value in [0, 100] and never fails.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::models::job_offer::JobOffer;
use crate::models::seeker::{JobSeekerProfile, WorkExperience};

const NEUTRAL_SALARY_SCORE: f64 = 50.0;
const OVERPAID_SALARY_SCORE: f64 = 70.0;
const ESTIMATED_MAX_FACTOR: f64 = 1.5;

fn normalized_skills(seeker: &JobSeekerProfile) -> HashSet<String> {
    seeker
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `matched / max(|seeker skills|, |job skills|) * 100`, exact lowercase match.
/// Both sets empty scores 0.
pub fn skill_score(seeker: &JobSeekerProfile, job_skills: &BTreeSet<String>) -> f64 {
    let seeker_skills = normalized_skills(seeker);
    let denominator = seeker_skills.len().max(job_skills.len());
    if denominator == 0 {
        return 0.0;
    }
    let matched = seeker_skills
        .iter()
        .filter(|skill| job_skills.contains(skill.as_str()))
        .count();
    matched as f64 / denominator as f64 * 100.0
}

/// Seeker skills (original spelling, profile order) that contain, or are
/// contained in, some job skill. Looser than `skill_score`; used for
/// explanations and profile matches.
pub fn matching_skills<'a>(
    seeker: &'a JobSeekerProfile,
    job_skills: &BTreeSet<String>,
) -> Vec<&'a str> {
    seeker
        .skills
        .iter()
        .filter(|skill| {
            let lower = skill.trim().to_lowercase();
            !lower.is_empty()
                && job_skills
                    .iter()
                    .any(|js| js.contains(&lower) || lower.contains(js.as_str()))
        })
        .map(String::as_str)
        .collect()
}

/// Branch taken by the location policy. Shared by the scorer and the reason
/// generator so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFit {
    RemoteMatch,
    RemoteOption,
    OnSiteForRemoteOnly,
    PreferredLocation,
    WillingToRelocate,
    OutsidePreferred,
}

impl LocationFit {
    pub fn evaluate(seeker: &JobSeekerProfile, job: &JobOffer) -> Self {
        let prefs = &seeker.preferences;
        match (job.remote, prefs.remote_only) {
            (true, true) => LocationFit::RemoteMatch,
            (true, false) => LocationFit::RemoteOption,
            (false, true) => LocationFit::OnSiteForRemoteOnly,
            (false, false) => {
                let job_location = job.location.to_lowercase();
                let preferred = prefs.locations.iter().any(|loc| {
                    let loc = loc.to_lowercase();
                    job_location.contains(&loc) || loc.contains(&job_location)
                });
                if preferred {
                    LocationFit::PreferredLocation
                } else if prefs.relocation_willing {
                    LocationFit::WillingToRelocate
                } else {
                    LocationFit::OutsidePreferred
                }
            }
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            LocationFit::RemoteMatch | LocationFit::PreferredLocation => 100.0,
            LocationFit::RemoteOption => 80.0,
            LocationFit::WillingToRelocate => 50.0,
            LocationFit::OnSiteForRemoteOnly | LocationFit::OutsidePreferred => 0.0,
        }
    }
}

pub fn location_score(seeker: &JobSeekerProfile, job: &JobOffer) -> f64 {
    LocationFit::evaluate(seeker, job).score()
}

pub fn job_type_score(seeker: &JobSeekerProfile, job: &JobOffer) -> f64 {
    if seeker.preferences.job_types.contains(&job.employment_type) {
        100.0
    } else {
        0.0
    }
}

/// True when both sides carry salary figures, regardless of currency.
pub fn salary_comparable(seeker: &JobSeekerProfile, job: &JobOffer) -> bool {
    job.salary_figures().is_some() && seeker.preferences.salary_expectation.is_some()
}

/// Range-overlap salary score. Missing data or differing currencies score a
/// neutral 50.
pub fn salary_score(seeker: &JobSeekerProfile, job: &JobOffer) -> f64 {
    let (Some(salary), Some(expectation)) = (
        job.salary_figures(),
        seeker.preferences.salary_expectation.as_ref(),
    ) else {
        return NEUTRAL_SALARY_SCORE;
    };
    if salary.currency != expectation.currency {
        return NEUTRAL_SALARY_SCORE;
    }

    let job_min = salary.min.unwrap_or(0.0);
    let job_max = salary.max.unwrap_or(job_min * ESTIMATED_MAX_FACTOR);
    let seeker_min = expectation.min;
    let seeker_max = expectation
        .max
        .unwrap_or(seeker_min * ESTIMATED_MAX_FACTOR);

    if job_max < seeker_min {
        return 0.0;
    }
    if job_min > seeker_max {
        return OVERPAID_SALARY_SCORE;
    }

    let overlap = job_max.min(seeker_max) - job_min.max(seeker_min);
    let seeker_coverage = coverage(overlap, seeker_max - seeker_min);
    let job_coverage = coverage(overlap, job_max - job_min);
    ((seeker_coverage + job_coverage) / 2.0 * 100.0).clamp(0.0, 100.0)
}

// A zero-width range is fully covered by any overlap with it.
fn coverage(overlap: f64, range: f64) -> f64 {
    if range <= 0.0 {
        1.0
    } else {
        (overlap / range).clamp(0.0, 1.0)
    }
}

/// Sum of entry durations in years; current or open-ended entries run to `today`.
pub fn total_experience_years(experience: &[WorkExperience], today: NaiveDate) -> f64 {
    experience
        .iter()
        .map(|exp| {
            let end = if exp.current {
                today
            } else {
                exp.end_date.unwrap_or(today)
            };
            let days = (end - exp.start_date).num_days().max(0);
            days as f64 / 365.0
        })
        .sum()
}

/// Title-aware experience tiering. A profile with no experience entries scores 0.
pub fn experience_score(seeker: &JobSeekerProfile, job: &JobOffer, today: NaiveDate) -> f64 {
    if seeker.experience.is_empty() {
        return 0.0;
    }
    let years = total_experience_years(&seeker.experience, today);
    if job.title.to_lowercase().contains("senior") {
        if years >= 5.0 {
            100.0
        } else if years >= 3.0 {
            70.0
        } else {
            30.0
        }
    } else if years >= 3.0 {
        90.0
    } else if years >= 1.0 {
        70.0
    } else {
        50.0
    }
}
