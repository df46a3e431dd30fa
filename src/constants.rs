//! Central constants for the forge-labels library

/// Default values for forge access
pub mod forge {
    /// Environment variable holding the forge instance URL
    pub const URL_ENV_VAR: &str = "FORGE_URL";

    /// Environment variable holding the access token
    pub const TOKEN_ENV_VAR: &str = forge_api::TOKEN_ENV_VAR;

    /// Environment variable overriding the label page size
    pub const PAGE_SIZE_ENV_VAR: &str = "FORGE_LABEL_PAGE_SIZE";
}

/// Default values for label resolution
pub mod labels {
    /// Page size requested when fetching a repository's label catalog
    pub const DEFAULT_PAGE_SIZE: u32 = forge_api::MAX_PAGE_SIZE;

    /// Upper bound on the number of suggestions attached to a not-found error
    pub const MAX_SUGGESTIONS: usize = 3;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "forge.yaml";
}
