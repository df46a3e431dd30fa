//! Forge labels - resolve label names and IDs against a Forgejo/Gitea repository

pub mod config;
pub mod constants;
pub mod labels;
pub mod logging;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use config::ForgeConfig;
pub use labels::{
    CachingLabelResolver, LabelResolutionError, LabelResolver, ResolutionResult, ResolveError,
    ResolvedLabel,
};

/// Helper to build a resolver from the default config file
pub fn load_default_resolver() -> anyhow::Result<CachingLabelResolver<forge_api::ForgeClient>> {
    let config = ForgeConfig::load(constants::config::DEFAULT_CONFIG_FILE)?;
    CachingLabelResolver::from_config(&config)
}
