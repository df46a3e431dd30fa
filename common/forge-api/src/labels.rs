//! Repository label operations

use crate::client::ForgeClient;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Largest page size the forge honours for list endpoints
pub const MAX_PAGE_SIZE: u32 = 100;

/// A repository label as returned by the forge
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Label {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exclusive: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub url: String,
}

impl Label {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: String::new(),
            description: String::new(),
            exclusive: false,
            is_archived: false,
            url: String::new(),
        }
    }
}

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub page_size: u32,
}

impl ListOptions {
    /// Request the first page only, with `page_size` clamped to `1..=MAX_PAGE_SIZE`
    pub fn first_page(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::first_page(MAX_PAGE_SIZE)
    }
}

impl ForgeClient {
    /// List the labels of a repository
    ///
    /// Only the page described by `options` is fetched.
    ///
    /// # Errors
    /// Returns an error if the request fails, the forge answers with a
    /// non-success status, or the response cannot be parsed
    pub async fn list_repo_labels(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Label>> {
        let url = self.api_url(&format!("repos/{}/{}/labels", owner, repo));
        tracing::debug!(%url, page = options.page, limit = options.page_size, "listing labels");

        let response = self
            .get(&url)
            .query(&[("page", options.page), ("limit", options.page_size)])
            .send()
            .await
            .with_context(|| format!("Failed to reach forge at {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "Failed to list labels ({}): {}",
                status,
                error_text
            ));
        }

        let labels: Vec<Label> = response
            .json()
            .await
            .context("Failed to parse label list response")?;
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_clamps_page_size() {
        assert_eq!(ListOptions::first_page(0).page_size, 1);
        assert_eq!(ListOptions::first_page(50).page_size, 50);
        assert_eq!(ListOptions::first_page(500).page_size, MAX_PAGE_SIZE);
        assert_eq!(ListOptions::first_page(500).page, 1);
    }

    #[test]
    fn test_label_deserialize_minimal() {
        let label: Label = serde_json::from_str(r#"{"id": 47, "name": "ready-to-merge"}"#).unwrap();
        assert_eq!(label, Label::new(47, "ready-to-merge"));
    }

    #[test]
    fn test_label_deserialize_full() {
        let json = r#"{
            "id": 3,
            "name": "kind/bug",
            "color": "ee0701",
            "description": "Something is broken",
            "exclusive": true,
            "is_archived": false,
            "url": "https://codeberg.org/api/v1/repos/o/r/labels/3"
        }"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.id, 3);
        assert_eq!(label.color, "ee0701");
        assert!(label.exclusive);
    }
}
