use serde::{Deserialize, Serialize};

/// One label chosen by the matcher, with its fused score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMatch {
    /// Position of the label in its catalog.
    pub index: usize,
    pub internal_name: String,
    pub display_name: String,
    pub score: f64,
}

/// Result of matching a document against one label catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Empty catalog, or no label had any defined similarity.
    NoResult,
    /// `return_count == 1`.
    Single(LabelMatch),
    /// `return_count > 1`, best first.
    Ranked(Vec<LabelMatch>),
}

impl MatchOutcome {
    /// The best label, if any.
    pub fn best(&self) -> Option<&LabelMatch> {
        match self {
            MatchOutcome::NoResult => None,
            MatchOutcome::Single(m) => Some(m),
            MatchOutcome::Ranked(ms) => ms.first(),
        }
    }

    pub fn matches(&self) -> &[LabelMatch] {
        match self {
            MatchOutcome::NoResult => &[],
            MatchOutcome::Single(m) => std::slice::from_ref(m),
            MatchOutcome::Ranked(ms) => ms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches().is_empty()
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.matches().iter().map(|m| m.display_name.as_str()).collect()
    }

    pub fn internal_names(&self) -> Vec<&str> {
        self.matches().iter().map(|m| m.internal_name.as_str()).collect()
    }
}
