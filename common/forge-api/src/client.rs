//! Forge client implementation

use crate::util::normalize_base_url;
use anyhow::Result;

/// Forge API client for making authenticated requests
pub struct ForgeClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ForgeClient {
    /// Create a new forge client for the instance at `base_url`
    ///
    /// If no token is provided, will try to read from the `FORGE_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    /// Returns an error if `base_url` is empty or whitespace only
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url)?,
            token: token.or_else(|| std::env::var(crate::TOKEN_ENV_VAR).ok()),
        })
    }

    /// The normalised instance URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has a token configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", crate::DEFAULT_USER_AGENT)
            .header("Accept", "application/json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        request
    }
}
