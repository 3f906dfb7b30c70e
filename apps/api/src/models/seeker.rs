use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::job_offer::EmploymentType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    pub min: f64,
    pub max: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPreferences {
    pub job_types: Vec<EmploymentType>,
    pub locations: Vec<String>,
    pub remote_only: bool,
    pub salary_expectation: Option<SalaryExpectation>,
    pub relocation_willing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSeekerProfile {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub preferences: JobPreferences,
}
