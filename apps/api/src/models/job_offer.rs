use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULL_TIME",
            EmploymentType::PartTime => "PART_TIME",
            EmploymentType::Contract => "CONTRACT",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FULL_TIME" => Some(EmploymentType::FullTime),
            "PART_TIME" => Some(EmploymentType::PartTime),
            "CONTRACT" => Some(EmploymentType::Contract),
            "FREELANCE" => Some(EmploymentType::Freelance),
            "INTERNSHIP" => Some(EmploymentType::Internship),
            _ => None,
        }
    }

    /// Human label used in match reasons, e.g. "full time".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobOfferStatus {
    Draft,
    Published,
    Closed,
}

impl JobOfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobOfferStatus::Draft => "DRAFT",
            JobOfferStatus::Published => "PUBLISHED",
            JobOfferStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(JobOfferStatus::Draft),
            "PUBLISHED" => Some(JobOfferStatus::Published),
            "CLOSED" => Some(JobOfferStatus::Closed),
            _ => None,
        }
    }
}

/// Advertised pay band. Either bound may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary: Option<SalaryRange>,
    pub employment_type: EmploymentType,
    pub remote: bool,
    pub status: JobOfferStatus,
}

impl JobOffer {
    /// Salary band only when it carries at least one figure.
    pub fn salary_figures(&self) -> Option<&SalaryRange> {
        self.salary
            .as_ref()
            .filter(|s| s.min.is_some() || s.max.is_some())
    }

    pub fn is_open(&self) -> bool {
        self.status == JobOfferStatus::Published
    }
}
