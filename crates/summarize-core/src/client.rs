//! HTTP-backed summarization client.
//!
//! Speaks the Hugging Face Inference API shape for summarization
//! models: `POST {base}/models/{model}` with the chunk text and
//! generation parameters, response `[{"summary_text": …}]`. Works
//! against the hosted API or a local text-generation-inference server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SummarizeError;
use crate::summarizer::{Summarizer, SummaryOptions};

/// Calls a summarization model over HTTP.
pub struct InferenceSummarizer {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl InferenceSummarizer {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct InferenceResponse {
    summary_text: String,
}

#[async_trait]
impl Summarizer for InferenceSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_length: options.max_length,
                min_length: options.min_length,
                do_sample: options.sample,
            },
        };

        debug!(
            model = %self.model,
            chunk_chars = text.chars().count(),
            "calling summarization backend"
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "summarization backend error");
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let mut summaries: Vec<InferenceResponse> = response.json().await?;
        if summaries.is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }
        Ok(summaries.remove(0).summary_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = InferenceSummarizer::new(
            "http://localhost:8080/",
            "sshleifer/distilbart-cnn-12-6",
            std::time::Duration::from_secs(30),
        )
        .unwrap();

        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/models/sshleifer/distilbart-cnn-12-6"
        );
    }
}
