//! Utility functions for forge operations

use anyhow::{Result, bail};

/// Normalise a forge instance URL
///
/// Surrounding whitespace and trailing slashes are removed so that paths can
/// be appended with a single `/`.
///
/// # Errors
/// Returns an error if the URL is empty after trimming
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        bail!("Forge URL must not be empty");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://codeberg.org///").unwrap(),
            "https://codeberg.org"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_base_url("  https://codeberg.org  ").unwrap(),
            "https://codeberg.org"
        );
    }

    #[test]
    fn test_normalize_empty_is_error() {
        let err = normalize_base_url("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
