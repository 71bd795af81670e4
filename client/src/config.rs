use serde::Deserialize;
use std::path::Path;

use crate::errors::{ApiError, Result};

/// Connection settings for the Meridian REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://erp.example.com/api/v1`.
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_seconds: default_timeout(),
        }
    }

    /// Reads `MERIDIAN_API_URL`, `MERIDIAN_API_KEY` and the optional
    /// `MERIDIAN_TIMEOUT_SECONDS` from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("MERIDIAN_API_URL")
            .map_err(|_| ApiError::Config("MERIDIAN_API_URL not set".to_string()))?;
        let api_key = std::env::var("MERIDIAN_API_KEY")
            .map_err(|_| ApiError::Config("MERIDIAN_API_KEY not set".to_string()))?;
        let timeout_seconds = match std::env::var("MERIDIAN_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ApiError::Config("MERIDIAN_TIMEOUT_SECONDS must be a number".to_string())
            })?,
            Err(_) => default_timeout(),
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_seconds,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            ApiError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                err
            ))
        })
    }
}

fn default_timeout() -> u64 {
    30
}
