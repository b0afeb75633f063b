pub mod catalog;

use shared_types::ClauseReviewResult;

pub use catalog::CLAUSE_CATALOG;

/// ClauseEngine entry point
pub struct ClauseEngine;

impl ClauseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Check a document's text for the expected-clause catalog.
    ///
    /// Returns the clauses that are absent, in catalog order. Pure
    /// function of the text; identical input always yields an identical
    /// result.
    pub fn review(&self, text: &str) -> ClauseReviewResult {
        let text_lower = text.to_lowercase();

        let missing_clauses = catalog::CLAUSE_CATALOG
            .iter()
            .filter(|keyword| !catalog::clause_present(&text_lower, keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        ClauseReviewResult { missing_clauses }
    }
}

impl Default for ClauseEngine {
    fn default() -> Self {
        Self::new()
    }
}
