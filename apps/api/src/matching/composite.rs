use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub job_type: f64,
    pub salary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            location: 0.2,
            job_type: 0.2,
            salary: 0.1,
        }
    }
}

/// Per-dimension sub-scores, each in [0, 100] before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skill: f64,
    pub location: f64,
    pub job_type: f64,
    pub salary: f64,
}

/// Weighted composite: round(0.5*skill + 0.2*location + 0.2*job_type + 0.1*salary)
pub fn compute_match_score(scores: &DimensionScores, weights: &ScoringWeights) -> u32 {
    let weighted = weights.skills * scores.skill
        + weights.location * scores.location
        + weights.job_type * scores.job_type
        + weights.salary * scores.salary;
    weighted.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(skill: f64, location: f64, job_type: f64, salary: f64) -> DimensionScores {
        DimensionScores {
            skill,
            location,
            job_type,
            salary,
        }
    }

    #[test]
    fn test_all_full_scores_give_100() {
        let w = ScoringWeights::default();
        assert_eq!(compute_match_score(&scores(100.0, 100.0, 100.0, 100.0), &w), 100);
    }

    #[test]
    fn test_all_zero_scores_give_0() {
        let w = ScoringWeights::default();
        assert_eq!(compute_match_score(&scores(0.0, 0.0, 0.0, 0.0), &w), 0);
    }

    #[test]
    fn test_weighted_combination_rounds() {
        let w = ScoringWeights::default();
        // 0.5*75 + 0.2*100 + 0.2*100 + 0.1*50 = 37.5 + 20 + 20 + 5 = 82.5
        assert_eq!(compute_match_score(&scores(75.0, 100.0, 100.0, 50.0), &w), 83);
        // 0.5*40 + 0.2*80 + 0.2*0 + 0.1*0 = 36
        assert_eq!(compute_match_score(&scores(40.0, 80.0, 0.0, 0.0), &w), 36);
    }

    #[test]
    fn test_skills_dominate() {
        let w = ScoringWeights::default();
        let skills_only = compute_match_score(&scores(100.0, 0.0, 0.0, 0.0), &w);
        let rest_only = compute_match_score(&scores(0.0, 100.0, 0.0, 100.0), &w);
        assert!(skills_only > rest_only);
    }

    #[test]
    fn test_score_clamped_with_oversized_weights() {
        let w = ScoringWeights {
            skills: 2.0,
            location: 0.0,
            job_type: 0.0,
            salary: 0.0,
        };
        assert_eq!(compute_match_score(&scores(100.0, 0.0, 0.0, 0.0), &w), 100);
    }
}
