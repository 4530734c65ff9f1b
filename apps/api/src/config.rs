use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Unset or empty leaves the AI client unconfigured.
    pub openai_api_key: Option<String>,
    /// Any OpenAI-compatible chat-completions endpoint.
    pub openai_api_url: Option<String>,
    /// Overrides browser executable discovery.
    pub chrome_executable: Option<PathBuf>,
    pub pdf_max_retries: u32,
    pub pdf_retry_delay_ms: u64,
    pub pdf_network_idle_timeout_ms: u64,
    pub pdf_settle_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL"),
            chrome_executable: optional_env("CHROME_EXECUTABLE_PATH")
                .or_else(|| optional_env("PUPPETEER_EXECUTABLE_PATH"))
                .map(PathBuf::from),
            pdf_max_retries: parse_env("PDF_MAX_RETRIES", 3)?,
            pdf_retry_delay_ms: parse_env("PDF_RETRY_DELAY_MS", 1000)?,
            pdf_network_idle_timeout_ms: parse_env("PDF_NETWORK_IDLE_TIMEOUT_MS", 30_000)?,
            pdf_settle_delay_ms: parse_env("PDF_SETTLE_DELAY_MS", 500)?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_and_override() {
        std::env::remove_var("RESUME_API_TEST_UNSET");
        assert_eq!(parse_env("RESUME_API_TEST_UNSET", 7u32).unwrap(), 7);

        std::env::set_var("RESUME_API_TEST_RETRIES", " 5 ");
        assert_eq!(parse_env("RESUME_API_TEST_RETRIES", 3u32).unwrap(), 5);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_PORT", "five thousand");
        let err = parse_env::<u16>("RESUME_API_TEST_PORT", 5000).unwrap_err();
        assert!(err.to_string().contains("RESUME_API_TEST_PORT"));
    }

    #[test]
    fn test_blank_optional_is_none() {
        std::env::set_var("RESUME_API_TEST_BLANK", "   ");
        assert!(optional_env("RESUME_API_TEST_BLANK").is_none());
    }
}
