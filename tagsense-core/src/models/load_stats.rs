use serde::{Deserialize, Serialize};

/// Line counts from a resource load. Malformed lines are skipped, not fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub accepted: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub fn accept(&mut self) {
        self.accepted += 1;
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Combine the counts of two loads (e.g. glossary + sememe graph).
    pub fn merge(self, other: LoadStats) -> LoadStats {
        LoadStats {
            accepted: self.accepted + other.accepted,
            skipped: self.skipped + other.skipped,
        }
    }
}
