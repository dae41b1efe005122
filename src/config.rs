//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request is sent.
//!
//! ## Required Variables
//!
//! ```bash
//! export GRAPHQL_API_BASE_URL="https://api.short.example"
//! export HTTP_API_BASE_URL="https://api.short.example"
//! ```
//!
//! ## Optional Variables
//!
//! - `WEB_ORIGIN` - Origin of the web front end used in short links (default: `http://localhost:3000`)
//! - `CHROME_EXTENSION_ID` - Companion browser extension id
//! - `AUTH_TOKEN` - Auth token issued by a previous sign-in
//! - `CAPTCHA_TOKEN` - Pre-issued captcha token
//! - `REQUEST_TIMEOUT_SECS` - GraphQL request timeout (default: 10, range: 1-120)
//! - `HISTORY_CAPACITY` - Links kept for search (default: 100, range: 1-10000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub graphql_api_base_url: String,
    pub http_api_base_url: String,
    pub web_origin: String,
    pub chrome_extension_id: Option<String>,
    /// Auth token from a previous sign-in. Never logged.
    pub auth_token: Option<String>,
    /// Captcha token obtained out of band. Never logged.
    pub captcha_token: Option<String>,
    pub request_timeout_secs: u64,
    pub history_capacity: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required API base URL is missing.
    pub fn from_env() -> Result<Self> {
        let graphql_api_base_url =
            env::var("GRAPHQL_API_BASE_URL").context("GRAPHQL_API_BASE_URL must be set")?;
        let http_api_base_url =
            env::var("HTTP_API_BASE_URL").context("HTTP_API_BASE_URL must be set")?;

        let web_origin =
            env::var("WEB_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let chrome_extension_id = optional_var("CHROME_EXTENSION_ID");
        let auth_token = optional_var("AUTH_TOKEN");
        let captcha_token = optional_var("CAPTCHA_TOKEN");

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let history_capacity = env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            graphql_api_base_url,
            http_api_base_url,
            web_origin,
            chrome_extension_id,
            auth_token,
            captcha_token,
            request_timeout_secs,
            history_capacity,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a base URL or the web origin is not `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    /// - `request_timeout_secs` is outside 1-120
    /// - `history_capacity` is outside 1-10000
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("GRAPHQL_API_BASE_URL", &self.graphql_api_base_url),
            ("HTTP_API_BASE_URL", &self.http_api_base_url),
            ("WEB_ORIGIN", &self.web_origin),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.request_timeout_secs
            );
        }

        if self.history_capacity == 0 || self.history_capacity > 10_000 {
            anyhow::bail!(
                "HISTORY_CAPACITY must be between 1 and 10000, got {}",
                self.history_capacity
            );
        }

        Ok(())
    }

    /// Endpoint the GraphQL mutations are posted to.
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "{}/graphql",
            self.graphql_api_base_url.trim_end_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Logs a configuration summary without secrets.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  GraphQL endpoint: {}", self.graphql_endpoint());
        tracing::info!("  HTTP API: {}", self.http_api_base_url);
        tracing::info!("  Web origin: {}", self.web_origin);
        tracing::info!(
            "  Extension id: {}",
            self.chrome_extension_id.as_deref().unwrap_or("not configured")
        );
        tracing::info!("  Auth token: {}", mask_secret(self.auth_token.as_deref()));
        tracing::info!(
            "  Captcha token: {}",
            mask_secret(self.captcha_token.as_deref())
        );
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `None` → `not set`
/// - `"abcdef123"` → `abcd***`
/// - secrets of four characters or fewer → `***`
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "not set".to_string(),
        Some(s) if s.chars().count() <= 4 => "***".to_string(),
        Some(s) => format!("{}***", s.chars().take(4).collect::<String>()),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
