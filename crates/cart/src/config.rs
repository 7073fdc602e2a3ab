//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOEBOX_API_BASE_URL` - Base URL of the stock-and-product catalog API
//!
//! ## Optional
//! - `SHOEBOX_SNAPSHOT_PATH` - Cart snapshot file path (default: shoebox-cart.json)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Base URL of the catalog API serving `/stock/{id}` and `/products/{id}`
    pub api_base_url: Url,
    /// File path of the persisted cart snapshot slot
    pub snapshot_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_base_url("SHOEBOX_API_BASE_URL", &get_required_env("SHOEBOX_API_BASE_URL")?)?;
        let snapshot_path =
            PathBuf::from(get_env_or_default("SHOEBOX_SNAPSHOT_PATH", "shoebox-cart.json"));

        Ok(Self {
            api_base_url,
            snapshot_path,
        })
    }
}

/// Parse and validate a base URL value.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }
    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_accepts_http() {
        let url = parse_base_url("TEST_VAR", "http://localhost:3333").expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:3333/");
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let err = parse_base_url("TEST_VAR", "not a url").expect_err("invalid url");
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn parse_base_url_rejects_non_base_schemes() {
        let err = parse_base_url("TEST_VAR", "mailto:shop@example.com").expect_err("non-base url");
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }
}
