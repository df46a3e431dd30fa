//! Configuration file loading

use crate::constants;
use crate::utils::validators::{self, ValidationError};
use anyhow::{Context, Result};
use forge_api::ForgeClient;
use serde::{Deserialize, Serialize};

/// Connection settings for a forge instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Base URL of the instance, e.g. `https://codeberg.org`
    pub url: String,
    /// Access token; falls back to `FORGE_TOKEN` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Page size used for the single label listing request
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    constants::labels::DEFAULT_PAGE_SIZE
}

impl ForgeConfig {
    /// Create a configuration for `url` with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            page_size: default_page_size(),
        }
    }

    /// Load configuration from a YAML file
    ///
    /// Values from the environment override the file, then the result is validated.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let mut config: ForgeConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(path, url = %config.url, "loaded forge configuration");
        Ok(config)
    }

    /// Build configuration purely from `FORGE_URL`, `FORGE_TOKEN` and
    /// `FORGE_LABEL_PAGE_SIZE`
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(constants::forge::URL_ENV_VAR).with_context(|| {
            format!(
                "{} environment variable is not set",
                constants::forge::URL_ENV_VAR
            )
        })?;

        let mut config = Self::new(url);
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay settings found in the environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var(constants::forge::URL_ENV_VAR) {
            self.url = url;
        }
        if let Ok(token) = std::env::var(constants::forge::TOKEN_ENV_VAR) {
            self.token = Some(token);
        }
        if let Ok(page_size) = std::env::var(constants::forge::PAGE_SIZE_ENV_VAR) {
            self.page_size = page_size.trim().parse().with_context(|| {
                format!(
                    "{} must be a positive integer, got '{}'",
                    constants::forge::PAGE_SIZE_ENV_VAR,
                    page_size
                )
            })?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.url.trim().is_empty() {
            errors.push(ValidationError::EmptyForgeUrl);
        }
        if let Err(e) = validators::validate_page_size(self.page_size) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(validators::validation_errors_to_anyhow(errors))
        }
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))?;
        Ok(())
    }

    /// Build a forge client from this configuration
    pub fn client(&self) -> Result<ForgeClient> {
        ForgeClient::new(&self.url, self.token.clone())
    }
}
