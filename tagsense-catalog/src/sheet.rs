//! Per-run label assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tagsense_core::models::LabelMatch;

/// A label chosen for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAssignment {
    pub internal_name: String,
    pub display_name: String,
    pub score: f64,
}

impl From<&LabelMatch> for LabelAssignment {
    fn from(m: &LabelMatch) -> Self {
        Self {
            internal_name: m.internal_name.clone(),
            display_name: m.display_name.clone(),
            score: m.score,
        }
    }
}

/// The labels resolved for one document, keyed by dimension name.
///
/// Created per classification run; the only state that changes after matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSheet {
    assignments: BTreeMap<String, Vec<LabelAssignment>>,
}

impl LabelSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches for `dimension`, replacing earlier ones.
    /// An empty slice clears the dimension.
    pub fn assign(&mut self, dimension: &str, matches: &[LabelMatch]) {
        if matches.is_empty() {
            self.assignments.remove(dimension);
            return;
        }
        self.assignments.insert(
            dimension.to_string(),
            matches.iter().map(LabelAssignment::from).collect(),
        );
    }

    pub fn get(&self, dimension: &str) -> Option<&[LabelAssignment]> {
        self.assignments.get(dimension).map(Vec::as_slice)
    }

    /// Display names assigned to `dimension`, best first.
    pub fn display_names(&self, dimension: &str) -> Vec<&str> {
        self.get(dimension)
            .unwrap_or_default()
            .iter()
            .map(|a| a.display_name.as_str())
            .collect()
    }

    pub fn dimensions(&self) -> Vec<&str> {
        self.assignments.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
