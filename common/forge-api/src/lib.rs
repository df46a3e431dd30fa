//! Forge REST API client library
//!
//! Thin client for Forgejo/Gitea compatible `api/v1` endpoints. Only the
//! calls needed by label resolution live here.
//!
//! ## Modules
//!
//! - [`client`]: Core forge client implementation
//! - [`labels`]: Repository label listing
//! - [`util`]: URL helpers

mod client;
mod labels;
mod util;

// Re-export public API
pub use client::ForgeClient;
pub use labels::{Label, ListOptions, MAX_PAGE_SIZE};
pub use util::normalize_base_url;

/// Environment variable consulted when no token is passed to [`ForgeClient::new`]
pub const TOKEN_ENV_VAR: &str = "FORGE_TOKEN";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("forge-api/", env!("CARGO_PKG_VERSION"));
