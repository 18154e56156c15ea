use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
///
/// Credentials are optional here on purpose: a missing key only surfaces
/// when the LLM call fails and the report falls back to its fixed text.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub azure_openai_endpoint: Option<String>,
    pub openai_api_version: String,
    pub azure_openai_deployment: String,
    pub openai_model: String,
    pub report_temperature: f32,
    pub search_base_url: String,
    pub fetch_timeout: Duration,
    pub docx_template_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            azure_openai_endpoint: non_empty_var("AZURE_OPENAI_ENDPOINT"),
            openai_api_version: env::var("OPENAI_API_VERSION")
                .unwrap_or_else(|_| "2024-06-01".to_string()),
            azure_openai_deployment: env::var("AZURE_OPENAI_DEPLOYMENT")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            report_temperature: env::var("REPORT_TEMPERATURE")
                .unwrap_or_else(|_| "0.7".to_string())
                .parse()
                .context("REPORT_TEMPERATURE must be a number")?,
            search_base_url: env::var("SEARCH_BASE_URL")
                .unwrap_or_else(|_| crate::kernel::GOOGLE_SEARCH_URL.to_string()),
            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            docx_template_path: env::var("DOCX_TEMPLATE_PATH")
                .unwrap_or_else(|_| "ModelTemplate.docx".to_string())
                .into(),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
