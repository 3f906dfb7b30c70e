//! Demo catalogue: four published job offers and four seeker profiles.
//! Seeds the in-memory store and doubles as a test fixture.

use chrono::NaiveDate;

use crate::models::job_offer::{EmploymentType, JobOffer, JobOfferStatus, SalaryRange};
use crate::models::seeker::{JobPreferences, JobSeekerProfile, SalaryExpectation, WorkExperience};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

fn usd(min: f64, max: f64) -> Option<SalaryRange> {
    Some(SalaryRange {
        min: Some(min),
        max: Some(max),
        currency: "USD".to_string(),
    })
}

fn role(company: &str, title: &str, start: &str, end: Option<&str>) -> WorkExperience {
    WorkExperience {
        company: company.to_string(),
        title: title.to_string(),
        start_date: date(start),
        end_date: end.map(date),
        current: end.is_none(),
    }
}

pub fn job_offers() -> Vec<JobOffer> {
    vec![
        JobOffer {
            id: "1".into(),
            title: "Frontend Developer".into(),
            company: "TechCorp".into(),
            location: "Remote".into(),
            description: "We are looking for a skilled Frontend Developer to join our team.".into(),
            requirements: strings(&[
                "3+ years of React experience",
                "TypeScript knowledge",
                "CSS/SCSS proficiency",
            ]),
            responsibilities: strings(&[
                "Develop user interfaces",
                "Collaborate with designers",
                "Write clean, maintainable code",
            ]),
            salary: None,
            employment_type: EmploymentType::FullTime,
            remote: true,
            status: JobOfferStatus::Published,
        },
        JobOffer {
            id: "2".into(),
            title: "Backend Engineer".into(),
            company: "DataSystems".into(),
            location: "New York".into(),
            description: "Join our backend team to build scalable APIs and services.".into(),
            requirements: strings(&[
                "Node.js experience",
                "Database knowledge",
                "API design skills",
            ]),
            responsibilities: strings(&[
                "Design and implement APIs",
                "Optimize database queries",
                "Ensure high performance",
            ]),
            salary: usd(90_000.0, 120_000.0),
            employment_type: EmploymentType::FullTime,
            remote: false,
            status: JobOfferStatus::Published,
        },
        JobOffer {
            id: "3".into(),
            title: "Full Stack Developer".into(),
            company: "WebSolutions".into(),
            location: "San Francisco".into(),
            description:
                "Looking for a versatile developer who can work on both frontend and backend."
                    .into(),
            requirements: strings(&[
                "JavaScript proficiency",
                "React experience",
                "Node.js knowledge",
            ]),
            responsibilities: strings(&[
                "Develop full-stack applications",
                "Implement features end-to-end",
                "Optimize performance",
            ]),
            salary: None,
            employment_type: EmploymentType::FullTime,
            remote: false,
            status: JobOfferStatus::Published,
        },
        JobOffer {
            id: "4".into(),
            title: "DevOps Engineer".into(),
            company: "CloudTech".into(),
            location: "Remote".into(),
            description: "Help us build and maintain our cloud infrastructure.".into(),
            requirements: strings(&[
                "AWS experience",
                "Docker and Kubernetes knowledge",
                "CI/CD pipeline experience",
            ]),
            responsibilities: strings(&[
                "Manage cloud infrastructure",
                "Implement CI/CD pipelines",
                "Monitor system performance",
            ]),
            salary: usd(100_000.0, 140_000.0),
            employment_type: EmploymentType::FullTime,
            remote: true,
            status: JobOfferStatus::Published,
        },
    ]
}

pub fn job_seekers() -> Vec<JobSeekerProfile> {
    vec![
        JobSeekerProfile {
            id: "1".into(),
            full_name: "John Doe".into(),
            title: "Frontend Developer".into(),
            skills: strings(&["React", "TypeScript", "CSS", "HTML", "JavaScript"]),
            experience: vec![
                role("TechCorp", "Frontend Developer", "2020-01-01", Some("2023-01-01")),
                role("WebSolutions", "Junior Developer", "2018-01-01", Some("2019-12-31")),
            ],
            preferences: JobPreferences {
                job_types: vec![EmploymentType::FullTime, EmploymentType::Contract],
                locations: strings(&["New York", "Remote"]),
                remote_only: true,
                salary_expectation: Some(SalaryExpectation {
                    min: 90_000.0,
                    max: Some(120_000.0),
                    currency: "USD".into(),
                }),
                relocation_willing: false,
            },
        },
        JobSeekerProfile {
            id: "2".into(),
            full_name: "Jane Smith".into(),
            title: "Backend Engineer".into(),
            skills: strings(&["Node.js", "Python", "MongoDB", "SQL", "Express", "API Design"]),
            experience: vec![
                role("DataSystems", "Backend Engineer", "2019-03-01", None),
                role("CodeCorp", "Software Developer", "2017-06-01", Some("2019-02-28")),
            ],
            preferences: JobPreferences {
                job_types: vec![EmploymentType::FullTime],
                locations: strings(&["San Francisco", "Seattle", "Remote"]),
                remote_only: false,
                salary_expectation: Some(SalaryExpectation {
                    min: 110_000.0,
                    max: Some(150_000.0),
                    currency: "USD".into(),
                }),
                relocation_willing: true,
            },
        },
        JobSeekerProfile {
            id: "3".into(),
            full_name: "Alex Johnson".into(),
            title: "Full Stack Developer".into(),
            skills: strings(&["JavaScript", "React", "Node.js", "Express", "MongoDB", "AWS"]),
            experience: vec![
                role("WebSolutions", "Full Stack Developer", "2020-05-01", None),
                role("AppTech", "Frontend Developer", "2018-07-01", Some("2020-04-30")),
            ],
            preferences: JobPreferences {
                job_types: vec![
                    EmploymentType::FullTime,
                    EmploymentType::Contract,
                    EmploymentType::Freelance,
                ],
                locations: strings(&["Chicago", "Remote"]),
                remote_only: true,
                salary_expectation: None,
                relocation_willing: false,
            },
        },
        JobSeekerProfile {
            id: "4".into(),
            full_name: "Sam Wilson".into(),
            title: "DevOps Engineer".into(),
            skills: strings(&[
                "Docker",
                "Kubernetes",
                "AWS",
                "CI/CD",
                "Terraform",
                "Jenkins",
                "Linux",
            ]),
            experience: vec![
                role("CloudTech", "DevOps Engineer", "2019-08-01", None),
                role("InfraSolutions", "System Administrator", "2017-03-01", Some("2019-07-31")),
            ],
            preferences: JobPreferences {
                job_types: vec![EmploymentType::FullTime, EmploymentType::Contract],
                locations: strings(&["Seattle", "Portland", "Remote"]),
                remote_only: true,
                salary_expectation: Some(SalaryExpectation {
                    min: 120_000.0,
                    max: Some(160_000.0),
                    currency: "USD".into(),
                }),
                relocation_willing: false,
            },
        },
    ]
}
