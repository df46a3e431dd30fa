//! Label resolution types and errors

use crate::utils::validators::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label with both its numeric ID and a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabel {
    pub id: i64,
    pub name: String,
}

impl ResolvedLabel {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Output of a successful batch resolution
///
/// Both vectors have one entry per input token, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub label_ids: Vec<i64>,
    pub resolved_labels: Vec<ResolvedLabel>,
}

impl ResolutionResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            label_ids: Vec::with_capacity(capacity),
            resolved_labels: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, label: ResolvedLabel) {
        self.label_ids.push(label.id);
        self.resolved_labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.label_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_ids.is_empty()
    }

    /// Pretty JSON array of the resolved labels, for display
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.resolved_labels)
    }
}

/// A single token that could not be turned into a label ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("label '{input}' {reason}{}", format_suggestions(.suggestions))]
pub struct LabelResolutionError {
    pub input: String,
    pub reason: String,
    pub suggestions: Vec<String>,
}

impl LabelResolutionError {
    pub fn new(
        input: impl Into<String>,
        reason: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
            suggestions,
        }
    }

    /// Token was empty after trimming
    pub fn empty() -> Self {
        Self::new("", "empty label not allowed", Vec::new())
    }

    /// Token parsed as an integer that is zero or negative
    pub fn non_positive(input: &str) -> Self {
        Self::new(input, "ID must be positive", Vec::new())
    }

    /// Token is a name that no label in the repository matches
    pub fn not_found(input: &str, owner: &str, repo: &str, suggestions: Vec<String>) -> Self {
        Self::new(
            input,
            format!("not found in repository {}/{}", owner, repo),
            suggestions,
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Everything that can abort a batch resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Label(#[from] LabelResolutionError),

    #[error("invalid repository: {0}")]
    Repository(#[from] ValidationError),

    #[error("failed to fetch repository labels: {0:#}")]
    Fetch(anyhow::Error),
}

impl ResolveError {
    /// The token-level error, if this is one
    pub fn as_label_error(&self) -> Option<&LabelResolutionError> {
        match self {
            ResolveError::Label(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_without_suggestions() {
        let err = LabelResolutionError::new("test-label", "not found", Vec::new());
        assert_eq!(err.to_string(), "label 'test-label' not found");
    }

    #[test]
    fn test_error_with_suggestions() {
        let err = LabelResolutionError::new(
            "ready-to-mergee",
            "not found",
            vec!["ready-merge".to_string(), "ready-to-test".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "label 'ready-to-mergee' not found. Did you mean: ready-merge, ready-to-test?"
        );
    }

    #[test]
    fn test_constructors() {
        assert_eq!(LabelResolutionError::empty().to_string(), "label '' empty label not allowed");
        assert_eq!(
            LabelResolutionError::non_positive("-1").to_string(),
            "label '-1' ID must be positive"
        );
        let err = LabelResolutionError::not_found("bgu", "owner", "repo", vec!["bug".to_string()]);
        assert_eq!(err.reason, "not found in repository owner/repo");
        assert_eq!(err.suggestions, vec!["bug"]);
    }

    #[test]
    fn test_resolved_label_json() {
        let label = ResolvedLabel::new(47, "ready-to-merge");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"id":47,"name":"ready-to-merge"}"#);
    }

    #[test]
    fn test_resolution_result_push_keeps_vectors_aligned() {
        let mut result = ResolutionResult::with_capacity(2);
        result.push(ResolvedLabel::new(47, "ready-to-merge"));
        result.push(ResolvedLabel::new(46, "in-review"));

        assert_eq!(result.label_ids, vec![47, 46]);
        assert_eq!(result.resolved_labels[1].name, "in-review");
        assert_eq!(result.len(), 2);

        let json: serde_json::Value = serde_json::from_str(&result.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json[0]["id"], 47);
        assert_eq!(json[1]["name"], "in-review");
    }

    #[test]
    fn test_fetch_error_keeps_context_chain() {
        let cause = anyhow::anyhow!("connection refused").context("failed to list labels");
        let err = ResolveError::Fetch(cause);
        assert_eq!(
            err.to_string(),
            "failed to fetch repository labels: failed to list labels: connection refused"
        );
        assert!(err.as_label_error().is_none());
    }
}
