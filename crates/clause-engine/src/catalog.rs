//! The expected-clause catalog.
//!
//! Fixed at build time and ordered; review results report missing
//! clauses in this order. Matching is plain case-insensitive substring
//! containment -- no word boundaries, no stemming, no synonyms. That is
//! a documented limitation of the reviewer, not something to paper over
//! here.

/// Clause keywords every reviewed contract is expected to contain.
pub const CLAUSE_CATALOG: [&str; 4] = [
    "confidentiality",
    "termination",
    "governing law",
    "dispute resolution",
];

/// True if `keyword` occurs anywhere in `text_lower`.
///
/// `text_lower` must already be lower-cased; catalog entries are stored
/// lower-cased so only the document side needs folding.
pub fn clause_present(text_lower: &str, keyword: &str) -> bool {
    text_lower.contains(keyword)
}
