//! Error types for summarization

use thiserror::Error;

/// A failed summarization. One chunk failing fails the whole request;
/// there is no partial-result fallback and no retry.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarization request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("summarization backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("summarization backend returned no summary")]
    EmptyResponse,
}
