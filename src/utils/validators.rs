//! Validation utilities
//!
//! Checks applied to repository coordinates and configuration values before
//! they are used to build cache keys or API requests.

use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Repository owner is empty or whitespace only
    EmptyOwner,
    /// Repository name is empty or whitespace only
    EmptyRepositoryName,
    /// A coordinate contains a path separator
    InvalidSegment { field: &'static str, value: String },
    /// Forge URL is empty
    EmptyForgeUrl,
    /// Page size outside the range the forge accepts
    InvalidPageSize(u32),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyOwner => write!(f, "Repository owner cannot be empty"),
            ValidationError::EmptyRepositoryName => {
                write!(f, "Repository name cannot be empty")
            }
            ValidationError::InvalidSegment { field, value } => {
                write!(f, "Repository {} '{}' must not contain '/'", field, value)
            }
            ValidationError::EmptyForgeUrl => write!(f, "Forge URL cannot be empty"),
            ValidationError::InvalidPageSize(size) => write!(
                f,
                "Page size {} must be between 1 and {}",
                size,
                forge_api::MAX_PAGE_SIZE
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convert a list of validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!("Configuration validation failed: {}", messages.join("; "))
}

/// Validates a single owner or repository segment
fn validate_segment(
    field: &'static str,
    value: &str,
    empty: ValidationError,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(empty);
    }
    if value.contains('/') {
        return Err(ValidationError::InvalidSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validates repository coordinates
///
/// Both parts must be non-empty and free of `/`, which keeps the joined
/// `owner/repo` key unambiguous.
pub fn validate_repository(owner: &str, repo: &str) -> Result<(), ValidationError> {
    validate_segment("owner", owner, ValidationError::EmptyOwner)?;
    validate_segment("name", repo, ValidationError::EmptyRepositoryName)
}

/// Validates a label page size
pub fn validate_page_size(page_size: u32) -> Result<(), ValidationError> {
    if page_size == 0 || page_size > forge_api::MAX_PAGE_SIZE {
        return Err(ValidationError::InvalidPageSize(page_size));
    }
    Ok(())
}
