//! The summarization backend seam.

use async_trait::async_trait;

use crate::error::SummarizeError;
use crate::{SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH};

/// Generation bounds passed to the backend with every chunk.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SummaryOptions {
    /// Maximum summary length, in the backend's length unit.
    pub max_length: u32,
    /// Minimum summary length.
    pub min_length: u32,
    /// Whether the backend may sample. Kept false for deterministic
    /// output.
    pub sample: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: SUMMARY_MAX_LENGTH,
            min_length: SUMMARY_MIN_LENGTH,
            sample: false,
        }
    }
}

/// An external capability that maps a bounded-length text to a shorter
/// natural-language summary.
///
/// Implementations must accept any non-empty text up to
/// [`crate::MAX_CHUNK_CHARS`] characters; the pipeline never calls a
/// summarizer with empty input.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError>;
}
