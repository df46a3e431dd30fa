//! Where label catalogs come from

use crate::constants::labels::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use async_trait::async_trait;
use forge_api::{ForgeClient, Label, ListOptions};

/// Upstream provider of a repository's labels
///
/// Implementations return the first page only; callers never request more.
#[async_trait]
pub trait LabelSource: Send + Sync {
    async fn list_labels(&self, owner: &str, repo: &str, page_size: u32) -> Result<Vec<Label>>;
}

#[async_trait]
impl LabelSource for ForgeClient {
    async fn list_labels(&self, owner: &str, repo: &str, page_size: u32) -> Result<Vec<Label>> {
        self.list_repo_labels(owner, repo, ListOptions::first_page(page_size))
            .await
    }
}

/// Fetch the first page of a repository's labels at the maximum page size
pub async fn fetch_repository_labels<S>(source: &S, owner: &str, repo: &str) -> Result<Vec<Label>>
where
    S: LabelSource + ?Sized,
{
    source
        .list_labels(owner, repo, DEFAULT_PAGE_SIZE)
        .await
        .context("failed to list labels")
}
