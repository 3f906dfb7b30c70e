//! Match scoring — pluggable, trait-based scorer that ranks a job offer against
//! a seeker profile.
//!
//! Default: `KeywordMatchScorer` (closed skill vocabulary, fixed weights).
//! `RecommendationService` holds an `Arc<dyn MatchScorer>`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::matching::composite::{compute_match_score, DimensionScores, ScoringWeights};
use crate::matching::dimensions::{
    experience_score, job_type_score, location_score, matching_skills, salary_score, skill_score,
};
use crate::matching::keywords::SkillVocabulary;
use crate::matching::reasons::generate_match_reasons;
use crate::models::job_offer::JobOffer;
use crate::models::recommendation::{MatchReason, SkillMatch};
use crate::models::seeker::JobSeekerProfile;

/// Result of scoring one (seeker, job) pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub match_score: u32,
    pub dimensions: DimensionScores,
    pub reasons: Vec<MatchReason>,
}

/// Job-facing view of a pair, used to materialise `SeekerProfileMatch` records.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAssessment {
    pub match_score: u32,
    pub skill_matches: Vec<SkillMatch>,
    pub experience_match: u32,
    pub location_match: u32,
    pub salary_match: u32,
}

pub trait MatchScorer: Send + Sync {
    fn score(&self, seeker: &JobSeekerProfile, job: &JobOffer) -> MatchOutcome;

    fn assess_profile(
        &self,
        seeker: &JobSeekerProfile,
        job: &JobOffer,
        today: NaiveDate,
    ) -> ProfileAssessment;
}

const EXACT_RELEVANCE: u32 = 85;
const PARTIAL_RELEVANCE: u32 = 70;
const RELEVANCE_PER_EXTRA_MENTION: u32 = 5;

pub struct KeywordMatchScorer {
    vocabulary: SkillVocabulary,
    weights: ScoringWeights,
}

impl KeywordMatchScorer {
    pub fn new(vocabulary: SkillVocabulary, weights: ScoringWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    fn dimension_scores(
        &self,
        seeker: &JobSeekerProfile,
        job: &JobOffer,
        job_skills: &BTreeSet<String>,
    ) -> DimensionScores {
        DimensionScores {
            skill: skill_score(seeker, job_skills),
            location: location_score(seeker, job),
            job_type: job_type_score(seeker, job),
            salary: salary_score(seeker, job),
        }
    }

    /// 85 for an exact vocabulary hit, 70 for a substring hit, plus 5 for every
    /// further requirement/responsibility line that mentions the skill.
    fn skill_relevance(&self, skill: &str, job: &JobOffer, job_skills: &BTreeSet<String>) -> u32 {
        let skill = skill.trim().to_lowercase();
        let base = if job_skills.contains(&skill) {
            EXACT_RELEVANCE
        } else {
            PARTIAL_RELEVANCE
        };
        let mentions = job
            .requirements
            .iter()
            .chain(job.responsibilities.iter())
            .filter(|line| {
                self.vocabulary
                    .extract_keywords(line)
                    .iter()
                    .any(|kw| kw.contains(&skill) || skill.contains(kw.as_str()))
            })
            .count() as u32;
        (base + RELEVANCE_PER_EXTRA_MENTION * mentions.saturating_sub(1)).min(100)
    }
}

impl Default for KeywordMatchScorer {
    fn default() -> Self {
        Self::new(SkillVocabulary::default(), ScoringWeights::default())
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, seeker: &JobSeekerProfile, job: &JobOffer) -> MatchOutcome {
        let job_skills = self.vocabulary.job_skills(job);
        let dimensions = self.dimension_scores(seeker, job, &job_skills);
        MatchOutcome {
            match_score: compute_match_score(&dimensions, &self.weights),
            dimensions,
            reasons: generate_match_reasons(seeker, job, &job_skills),
        }
    }

    fn assess_profile(
        &self,
        seeker: &JobSeekerProfile,
        job: &JobOffer,
        today: NaiveDate,
    ) -> ProfileAssessment {
        let job_skills = self.vocabulary.job_skills(job);
        let dimensions = self.dimension_scores(seeker, job, &job_skills);
        let skill_matches = matching_skills(seeker, &job_skills)
            .into_iter()
            .map(|skill| SkillMatch {
                skill: skill.to_string(),
                relevance: self.skill_relevance(skill, job, &job_skills),
            })
            .collect();

        ProfileAssessment {
            match_score: compute_match_score(&dimensions, &self.weights),
            skill_matches,
            experience_match: experience_score(seeker, job, today).round() as u32,
            location_match: dimensions.location.round() as u32,
            salary_match: dimensions.salary.round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_offer::{EmploymentType, JobOfferStatus, SalaryRange};
    use crate::models::recommendation::MatchReasonType;
    use crate::models::seeker::{JobPreferences, SalaryExpectation, WorkExperience};
    use crate::store::demo;

    fn frontend_job() -> JobOffer {
        JobOffer {
            id: "1".into(),
            title: "Frontend Developer".into(),
            company: "TechCorp".into(),
            location: "Remote".into(),
            description: "We are looking for a skilled Frontend Developer.".into(),
            requirements: vec![
                "3+ years of React experience".into(),
                "TypeScript knowledge".into(),
                "CSS/SCSS proficiency".into(),
            ],
            responsibilities: vec![
                "Develop user interfaces".into(),
                "Collaborate with designers".into(),
                "Write clean, maintainable code".into(),
            ],
            salary: None,
            employment_type: EmploymentType::FullTime,
            remote: true,
            status: JobOfferStatus::Published,
        }
    }

    fn frontend_seeker() -> JobSeekerProfile {
        JobSeekerProfile {
            id: "1".into(),
            full_name: "John Doe".into(),
            title: "Frontend Developer".into(),
            skills: vec![
                "react".into(),
                "typescript".into(),
                "css".into(),
                "javascript".into(),
            ],
            experience: vec![WorkExperience {
                company: "TechCorp".into(),
                title: "Frontend Developer".into(),
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
                current: false,
            }],
            preferences: JobPreferences {
                job_types: vec![EmploymentType::FullTime, EmploymentType::Contract],
                locations: vec!["Remote".into()],
                remote_only: true,
                salary_expectation: None,
                relocation_willing: false,
            },
        }
    }

    #[test]
    fn test_frontend_pair_scores_strong_match() {
        let scorer = KeywordMatchScorer::default();
        let outcome = scorer.score(&frontend_seeker(), &frontend_job());

        assert!(outcome.dimensions.skill > 0.0);
        assert_eq!(outcome.dimensions.location, 100.0);
        assert_eq!(outcome.dimensions.job_type, 100.0);
        assert_eq!(outcome.dimensions.salary, 50.0);
        // 0.5*75 + 20 + 20 + 5 = 82.5
        assert_eq!(outcome.match_score, 83);
        assert!(outcome.match_score >= 80);
    }

    fn assert_outcome_in_bounds(outcome: &MatchOutcome) {
        assert!(outcome.match_score <= 100);
        for value in [
            outcome.dimensions.skill,
            outcome.dimensions.location,
            outcome.dimensions.job_type,
            outcome.dimensions.salary,
        ] {
            assert!((0.0..=100.0).contains(&value), "dimension out of range: {value}");
        }
        for reason in &outcome.reasons {
            assert!(reason.score <= 100);
        }
    }

    #[test]
    fn test_scores_stay_within_bounds_for_demo_catalogue() {
        let scorer = KeywordMatchScorer::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        for job in demo::job_offers() {
            for seeker in demo::job_seekers() {
                assert_outcome_in_bounds(&scorer.score(&seeker, &job));
                let assessment = scorer.assess_profile(&seeker, &job, today);
                assert!(assessment.match_score <= 100);
                assert!(assessment.experience_match <= 100);
                assert!(assessment.location_match <= 100);
                assert!(assessment.salary_match <= 100);
                assert!(assessment.skill_matches.iter().all(|m| m.relevance <= 100));
            }
        }
    }

    fn job_range(min: Option<f64>, max: Option<f64>, currency: &str) -> SalaryRange {
        SalaryRange {
            min,
            max,
            currency: currency.into(),
        }
    }

    fn expectation(min: f64, max: Option<f64>, currency: &str) -> SalaryExpectation {
        SalaryExpectation {
            min,
            max,
            currency: currency.into(),
        }
    }

    #[test]
    fn test_scores_stay_within_bounds_across_salary_variants() {
        let scorer = KeywordMatchScorer::default();
        let job_salaries = [
            None,
            Some(job_range(None, None, "USD")),
            Some(job_range(Some(50_000.0), Some(60_000.0), "USD")),
            Some(job_range(Some(200_000.0), None, "USD")),
            Some(job_range(None, Some(0.0), "USD")),
            Some(job_range(Some(90_000.0), Some(120_000.0), "EUR")),
        ];
        let expectations = [
            None,
            Some(expectation(0.0, Some(0.0), "USD")),
            Some(expectation(90_000.0, Some(120_000.0), "USD")),
            Some(expectation(300_000.0, None, "USD")),
            Some(expectation(1.0, Some(2.0), "EUR")),
        ];
        for mut job in demo::job_offers() {
            for salary in &job_salaries {
                job.salary = salary.clone();
                for mut seeker in demo::job_seekers() {
                    for wanted in &expectations {
                        seeker.preferences.salary_expectation = wanted.clone();
                        assert_outcome_in_bounds(&scorer.score(&seeker, &job));
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_job_salary_is_neutral_and_unexplained() {
        let scorer = KeywordMatchScorer::default();
        let mut seeker = frontend_seeker();
        seeker.preferences.salary_expectation = Some(SalaryExpectation {
            min: 90_000.0,
            max: None,
            currency: "USD".into(),
        });
        let outcome = scorer.score(&seeker, &frontend_job());
        assert_eq!(outcome.dimensions.salary, 50.0);
        assert!(outcome
            .reasons
            .iter()
            .all(|r| r.reason_type != MatchReasonType::Salary));
    }

    #[test]
    fn test_custom_vocabulary_changes_skill_detection() {
        let scorer = KeywordMatchScorer::new(
            SkillVocabulary::new(["react"]),
            ScoringWeights::default(),
        );
        let outcome = scorer.score(&frontend_seeker(), &frontend_job());
        // 1 match out of max(4 seeker skills, 1 job skill)
        assert!((outcome.dimensions.skill - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_assess_profile_is_deterministic() {
        let scorer = KeywordMatchScorer::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let first = scorer.assess_profile(&frontend_seeker(), &frontend_job(), today);
        let second = scorer.assess_profile(&frontend_seeker(), &frontend_job(), today);
        assert_eq!(first, second);
        assert_eq!(first.match_score, 83);
        assert_eq!(first.experience_match, 90);
        assert_eq!(first.location_match, 100);
        assert_eq!(first.salary_match, 50);
    }

    #[test]
    fn test_skill_relevance_rewards_exact_and_repeated_mentions() {
        let scorer = KeywordMatchScorer::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let mut job = frontend_job();
        job.responsibilities.push("Build React component library".into());
        let mut seeker = frontend_seeker();
        seeker.skills = vec!["React".into(), "Node.js".into()];
        job.requirements.push("Node tooling".into());

        let assessment = scorer.assess_profile(&seeker, &job, today);
        let relevance: Vec<(&str, u32)> = assessment
            .skill_matches
            .iter()
            .map(|m| (m.skill.as_str(), m.relevance))
            .collect();
        // React: exact, two lines; Node.js: substring of "node", one line
        assert_eq!(relevance, vec![("React", 90), ("Node.js", 70)]);
    }

    #[test]
    fn test_skill_relevance_capped_at_100() {
        let scorer = KeywordMatchScorer::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let mut job = frontend_job();
        job.requirements = (0..10).map(|i| format!("React project {i}")).collect();
        let mut seeker = frontend_seeker();
        seeker.skills = vec!["React".into()];
        let assessment = scorer.assess_profile(&seeker, &job, today);
        assert_eq!(assessment.skill_matches[0].relevance, 100);
    }

    #[test]
    fn test_salary_mismatch_reflected_in_assessment() {
        let scorer = KeywordMatchScorer::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let mut job = frontend_job();
        job.salary = Some(SalaryRange {
            min: Some(90_000.0),
            max: Some(120_000.0),
            currency: "USD".into(),
        });
        let mut seeker = frontend_seeker();
        seeker.preferences.salary_expectation = Some(SalaryExpectation {
            min: 130_000.0,
            max: None,
            currency: "USD".into(),
        });
        let assessment = scorer.assess_profile(&seeker, &job, today);
        assert_eq!(assessment.salary_match, 0);
    }
}
