//! Batch label resolution with a per-repository catalog cache

use super::catalog::LabelCatalog;
use super::source::LabelSource;
use super::types::{LabelResolutionError, ResolutionResult, ResolveError, ResolvedLabel};
use crate::config::ForgeConfig;
use crate::constants::labels::DEFAULT_PAGE_SIZE;
use crate::utils::validators::{self, ValidationError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use forge_api::{ForgeClient, MAX_PAGE_SIZE};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Turns user-supplied label tokens into canonical label IDs
///
/// Each token is either a decimal label ID (`"47"`) or a label name
/// (`"ready-to-merge"`, matched case-insensitively). Tokens are handled in
/// order after the repository's catalog is available, and the first token
/// that fails aborts the batch.
///
/// Besides token errors and upstream failures, an owner or repository name
/// that is empty or contains `/` is rejected with [`ResolveError::Repository`]
/// before anything is fetched.
#[async_trait]
pub trait LabelResolver: Send + Sync {
    async fn resolve_label_ids(
        &self,
        owner: &str,
        repo: &str,
        labels: &[String],
    ) -> Result<ResolutionResult, ResolveError>;
}

/// Cache partition key, rendered as `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey(String);

impl RepoKey {
    pub fn new(owner: &str, repo: &str) -> Result<Self, ValidationError> {
        validators::validate_repository(owner, repo)?;
        Ok(Self(format!("{}/{}", owner, repo)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trimmed token after syntactic classification
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Id { id: i64, raw: &'a str },
    Name(&'a str),
}

impl<'a> Token<'a> {
    fn classify(input: &'a str) -> Result<Self, LabelResolutionError> {
        let token = input.trim();
        if token.is_empty() {
            return Err(LabelResolutionError::empty());
        }

        match token.parse::<i64>() {
            Ok(id) if id <= 0 => Err(LabelResolutionError::non_positive(token)),
            Ok(id) => Ok(Token::Id { id, raw: token }),
            Err(_) => Ok(Token::Name(token)),
        }
    }
}

/// [`LabelResolver`] that fetches each repository's labels once and keeps them
///
/// Catalogs never expire; [`clear_cache`](Self::clear_cache) drops all of them.
/// A cache miss holds the write lock across the upstream call, so concurrent
/// misses on the same repository produce a single fetch.
pub struct CachingLabelResolver<S> {
    source: S,
    page_size: u32,
    cache: RwLock<HashMap<RepoKey, Arc<LabelCatalog>>>,
}

impl CachingLabelResolver<ForgeClient> {
    /// Build a resolver backed by the forge described in `config`
    pub fn from_config(config: &ForgeConfig) -> Result<Self> {
        Ok(Self::new(config.client()?).with_page_size(config.page_size))
    }
}

impl<S: LabelSource> CachingLabelResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Page size for the single listing request, clamped to `1..=100`
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Drop every cached catalog
    pub async fn clear_cache(&self) {
        let mut cache = self.cache.write().await;
        *cache = HashMap::new();
        debug!("Cleared label cache");
    }

    /// Number of repositories with a cached catalog
    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn catalog(
        &self,
        key: &RepoKey,
        owner: &str,
        repo: &str,
    ) -> Result<Arc<LabelCatalog>, ResolveError> {
        if let Some(catalog) = self.cache.read().await.get(key) {
            debug!("Using cached labels for {}", key);
            return Ok(Arc::clone(catalog));
        }

        let mut cache = self.cache.write().await;

        // another caller may have filled the entry while we waited
        if let Some(catalog) = cache.get(key) {
            return Ok(Arc::clone(catalog));
        }

        debug!("Fetching labels from API for {}", key);
        let labels = self
            .source
            .list_labels(owner, repo, self.page_size)
            .await
            .context("failed to list labels")
            .map_err(|e| {
                warn!("Label fetch for {} failed: {:#}", key, e);
                ResolveError::Fetch(e)
            })?;

        let catalog = Arc::new(LabelCatalog::from_labels(&labels));
        cache.insert(key.clone(), Arc::clone(&catalog));

        debug!("Cached {} labels for {}", labels.len(), key);
        Ok(catalog)
    }
}

#[async_trait]
impl<S: LabelSource> LabelResolver for CachingLabelResolver<S> {
    async fn resolve_label_ids(
        &self,
        owner: &str,
        repo: &str,
        labels: &[String],
    ) -> Result<ResolutionResult, ResolveError> {
        debug!("Resolving {} labels for {}/{}", labels.len(), owner, repo);

        if labels.is_empty() {
            return Ok(ResolutionResult::default());
        }

        let key = RepoKey::new(owner, repo)?;
        let catalog = self.catalog(&key, owner, repo).await?;

        let mut result = ResolutionResult::with_capacity(labels.len());
        for input in labels {
            let label = match Token::classify(input)? {
                Token::Id { id, raw } => {
                    // IDs are trusted even when missing from the fetched page
                    let name = catalog.find_name_by_id(id).unwrap_or(raw);
                    ResolvedLabel::new(id, name)
                }
                Token::Name(name) => match catalog.lookup_by_name(name) {
                    Some(id) => ResolvedLabel::new(id, name),
                    None => {
                        let suggestions = catalog.suggestions(name);
                        return Err(
                            LabelResolutionError::not_found(name, owner, repo, suggestions).into(),
                        );
                    }
                },
            };
            result.push(label);
        }

        debug!("Resolved {} labels successfully", result.len());
        Ok(result)
    }
}
