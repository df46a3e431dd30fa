//! Per-repository label catalog

use crate::constants::labels::MAX_SUGGESTIONS;
use forge_api::Label;
use std::collections::HashMap;

/// Both lookup directions for one repository's labels
///
/// Built in a single pass over one upstream listing, so the two maps always
/// describe the same label set. Name keys are lowercased; if two labels differ
/// only by case, the later one in listing order wins the name slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCatalog {
    name_to_id: HashMap<String, i64>,
    id_to_name: HashMap<i64, String>,
}

impl LabelCatalog {
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a Label>,
    {
        let mut catalog = Self::default();
        for label in labels {
            catalog
                .name_to_id
                .insert(label.name.to_lowercase(), label.id);
            catalog.id_to_name.insert(label.id, label.name.clone());
        }
        catalog
    }

    /// Case-insensitive lookup of a label ID by name
    pub fn lookup_by_name(&self, name: &str) -> Option<i64> {
        self.name_to_id.get(&name.to_lowercase()).copied()
    }

    /// Reverse lookup, returning the name in its original case
    pub fn find_name_by_id(&self, id: i64) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    /// Names that contain `input` or are contained in it, case-insensitively
    ///
    /// Results are lowercased, sorted, and capped at [`MAX_SUGGESTIONS`].
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let input = input.to_lowercase();
        let mut matches: Vec<&String> = self
            .name_to_id
            .keys()
            .filter(|name| name.contains(&input) || input.contains(name.as_str()))
            .collect();

        matches.sort();
        matches
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Number of distinct label IDs
    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}
