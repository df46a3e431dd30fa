//! Label name/ID resolution
//!
//! Converts a mixed list of numeric label IDs and label names into canonical
//! label IDs for one repository.
//!
//! ## Architecture
//!
//! - [`catalog`]: Both lookup directions for one repository's labels
//! - [`source`]: Upstream label listing behind the [`LabelSource`] trait
//! - [`resolver`]: The cached [`CachingLabelResolver`]
//! - [`types`]: Results and errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forge_labels::config::ForgeConfig;
//! use forge_labels::labels::{CachingLabelResolver, LabelResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let resolver = CachingLabelResolver::from_config(&ForgeConfig::new("https://codeberg.org"))?;
//! let labels = vec!["47".to_string(), "ready-to-merge".to_string()];
//! let result = resolver.resolve_label_ids("goern", "forgejo-mcp", &labels).await?;
//! println!("{:?}", result.label_ids);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod resolver;
pub mod source;
pub mod types;

pub use catalog::LabelCatalog;
pub use resolver::{CachingLabelResolver, LabelResolver, RepoKey};
pub use source::{LabelSource, fetch_repository_labels};
pub use types::{LabelResolutionError, ResolutionResult, ResolveError, ResolvedLabel};
