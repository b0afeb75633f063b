//! Chunk-and-reduce summarization pipeline.

use tracing::debug;

use crate::chunk::chunk_text;
use crate::error::SummarizeError;
use crate::summarizer::{Summarizer, SummaryOptions};
use crate::MAX_CHUNK_CHARS;

/// Summarize a document of arbitrary length with the standard chunk
/// size and generation bounds.
pub async fn summarize_document(
    summarizer: &dyn Summarizer,
    text: &str,
) -> Result<String, SummarizeError> {
    summarize_document_with(summarizer, text, MAX_CHUNK_CHARS, &SummaryOptions::default()).await
}

/// Summarize with explicit chunk size and generation bounds.
///
/// Chunks are summarized strictly in sequence and the partial summaries
/// joined with single spaces, in chunk order. An empty document yields
/// an empty summary without touching the backend, whose contract does
/// not cover empty input. The first backend failure aborts the whole
/// operation.
pub async fn summarize_document_with(
    summarizer: &dyn Summarizer,
    text: &str,
    max_chunk_chars: usize,
    options: &SummaryOptions,
) -> Result<String, SummarizeError> {
    let chunks = chunk_text(text, max_chunk_chars);
    if chunks.is_empty() {
        return Ok(String::new());
    }

    debug!(chunk_count = chunks.len(), "summarizing document");

    let mut partials = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        partials.push(summarizer.summarize(chunk, options).await?);
    }

    Ok(partials.join(" "))
}
