use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL backend when set; in-memory store otherwise.
    pub database_url: Option<String>,
    /// Preload the demo catalogue into the in-memory store.
    pub seed_demo_data: bool,
    /// JSON array of skill terms replacing the built-in vocabulary.
    pub skill_vocabulary_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            seed_demo_data: match optional_env("SEED_DEMO_DATA") {
                Some(v) => parse_bool(&v).context("SEED_DEMO_DATA must be true or false")?,
                None => true,
            },
            skill_vocabulary_path: optional_env("SKILL_VOCABULARY_PATH").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" YES ").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("False").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }
}
