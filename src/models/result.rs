//! Results of backup runs
//!
//! Created fresh per run and handed back to the caller. Nothing here is
//! persisted by the library.

use serde::{Deserialize, Serialize};

/// Count and file stems produced by one category run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupResult {
    /// Number of records written
    pub config_count: usize,

    /// Sanitized file stems, in write order
    pub outputs: Vec<String>,
}

impl BackupResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one written file
    pub fn push(&mut self, stem: impl Into<String>) {
        self.config_count += 1;
        self.outputs.push(stem.into());
    }

    /// Returns true if nothing was written
    pub fn is_empty(&self) -> bool {
        self.config_count == 0
    }
}

/// Per-category results of a multi-category run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSummary {
    /// `(category name, result)` in run order
    pub categories: Vec<(String, BackupResult)>,
}

impl BackupSummary {
    /// Add the result of one category
    pub fn add(&mut self, category: impl Into<String>, result: BackupResult) {
        self.categories.push((category.into(), result));
    }

    /// Total number of records written across all categories
    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, r)| r.config_count).sum()
    }

    /// Look up the result for a category
    pub fn get(&self, category: &str) -> Option<&BackupResult> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, r)| r)
    }
}
