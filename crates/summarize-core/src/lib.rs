//! Judgment summarization: chunk-and-reduce over an external
//! summarization backend.
//!
//! Long documents are partitioned into fixed-size character chunks, each
//! chunk is summarized by a [`Summarizer`], and the partial summaries
//! are joined in chunk order. The backend is always passed in as a
//! handle so the pipeline can be exercised against a stand-in.

pub mod chunk;
pub mod client;
pub mod error;
pub mod pipeline;
pub mod summarizer;

pub use chunk::chunk_text;
pub use client::InferenceSummarizer;
pub use error::SummarizeError;
pub use pipeline::{summarize_document, summarize_document_with};
pub use summarizer::{Summarizer, SummaryOptions};

/// Chunk size fed to the summarization backend, in characters.
pub const MAX_CHUNK_CHARS: usize = 1024;

/// Upper bound on each partial summary's length, in the backend's
/// length unit.
pub const SUMMARY_MAX_LENGTH: u32 = 120;

/// Lower bound on each partial summary's length.
pub const SUMMARY_MIN_LENGTH: u32 = 30;
