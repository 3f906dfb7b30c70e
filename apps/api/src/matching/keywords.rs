//! Keyword Extractor — maps free text onto a fixed skill vocabulary.
//!
//! This is a closed-vocabulary filter, not open extraction: a token is only
//! reported when it appears verbatim in the vocabulary. Terms that contain
//! non-word characters (`c#`, `.net`, `ci/cd`) can never be produced by the
//! tokenizer and therefore never match.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::job_offer::JobOffer;

/// Built-in technology/skill terms.
pub const DEFAULT_SKILL_TERMS: &[&str] = &[
    "javascript", "typescript", "react", "angular", "vue", "node", "express",
    "python", "django", "flask", "java", "spring", "c#", ".net", "php", "laravel",
    "ruby", "rails", "go", "rust", "swift", "kotlin", "html", "css", "sass",
    "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle", "aws", "azure",
    "gcp", "docker", "kubernetes", "jenkins", "ci/cd", "git", "agile", "scrum",
];

/// Injectable skill taxonomy. Terms are stored lowercased.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: HashSet<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Loads a vocabulary from a JSON array of strings.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary at {}", path.display()))?;
        let terms: Vec<String> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "Skill vocabulary at {} must be a JSON array of strings",
                path.display()
            )
        })?;
        let vocabulary = Self::new(terms);
        if vocabulary.is_empty() {
            bail!("Skill vocabulary at {} contains no terms", path.display());
        }
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    /// Lowercases `text`, splits on non-word characters and keeps the tokens
    /// present in the vocabulary.
    pub fn extract_keywords(&self, text: &str) -> BTreeSet<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|token| !token.is_empty() && self.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Union of keywords across every requirement and responsibility line.
    pub fn job_skills(&self, job: &JobOffer) -> BTreeSet<String> {
        job.requirements
            .iter()
            .chain(job.responsibilities.iter())
            .flat_map(|line| self.extract_keywords(line))
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_offer::{EmploymentType, JobOfferStatus};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_only_vocabulary_terms() {
        let vocab = SkillVocabulary::default();
        let found = vocab.extract_keywords("3+ years of React experience");
        assert_eq!(found, set(&["react"]));
    }

    #[test]
    fn test_splits_on_non_word_characters() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.extract_keywords("CSS/SCSS proficiency"), set(&["css"]));
        assert_eq!(vocab.extract_keywords("Node.js experience"), set(&["node"]));
    }

    #[test]
    fn test_terms_with_symbols_are_unreachable() {
        let vocab = SkillVocabulary::default();
        assert!(vocab.contains("ci/cd"));
        assert!(vocab.extract_keywords("CI/CD pipeline experience").is_empty());
        assert!(vocab.extract_keywords("C# and .NET").is_empty());
    }

    #[test]
    fn test_extraction_is_case_insensitive_and_deduplicated() {
        let vocab = SkillVocabulary::default();
        let found = vocab.extract_keywords("Docker, DOCKER and docker-compose");
        assert_eq!(found, set(&["docker"]));
    }

    #[test]
    fn test_custom_vocabulary_is_normalised() {
        let vocab = SkillVocabulary::new(["  Terraform ", "", "ANSIBLE"]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(
            vocab.extract_keywords("Terraform modules, Ansible playbooks, Docker"),
            set(&["ansible", "terraform"])
        );
    }

    #[test]
    fn test_empty_vocabulary_extracts_nothing() {
        let vocab = SkillVocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert!(vocab.extract_keywords("react typescript").is_empty());
    }

    #[test]
    fn test_job_skills_union_of_requirements_and_responsibilities() {
        let vocab = SkillVocabulary::default();
        let job = JobOffer {
            id: "4".into(),
            title: "DevOps Engineer".into(),
            company: "CloudTech".into(),
            location: "Remote".into(),
            description: String::new(),
            requirements: vec![
                "AWS experience".into(),
                "Docker and Kubernetes knowledge".into(),
            ],
            responsibilities: vec!["Automate deploys with Jenkins and Git".into()],
            salary: None,
            employment_type: EmploymentType::FullTime,
            remote: true,
            status: JobOfferStatus::Published,
        };
        assert_eq!(
            vocab.job_skills(&job),
            set(&["aws", "docker", "git", "jenkins", "kubernetes"])
        );
    }

    #[test]
    fn test_from_json_file_rejects_non_array() {
        let path = std::env::temp_dir().join(format!("vocab-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{"terms": ["rust"]}"#).unwrap();
        assert!(SkillVocabulary::from_json_file(&path).is_err());

        std::fs::write(&path, r#"["Rust", "Tokio"]"#).unwrap();
        let vocab = SkillVocabulary::from_json_file(&path).unwrap();
        assert!(vocab.contains("rust"));
        assert!(vocab.contains("tokio"));

        std::fs::write(&path, r#"["  ", ""]"#).unwrap();
        assert!(SkillVocabulary::from_json_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
