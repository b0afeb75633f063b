//! Error types for the Lexdraft server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use doc_extract::ExtractError;
use summarize_core::SummarizeError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Uploaded text is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Document could not be read: {0}")]
    UnreadableDocument(String),

    #[error("Summarization failed: {0}")]
    Summarization(#[from] SummarizeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ExtractError> for ServerError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Encoding(e) => ServerError::Encoding(e.to_string()),
            ExtractError::UnreadableDocument(msg) => ServerError::UnreadableDocument(msg),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::Encoding(msg) => (
                StatusCode::BAD_REQUEST,
                "ENCODING_ERROR",
                format!("Uploaded text is not valid UTF-8: {}", msg),
            ),
            ServerError::UnreadableDocument(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNREADABLE_DOCUMENT",
                format!("Document could not be read: {}", msg),
            ),
            ServerError::Summarization(err) => {
                tracing::error!("Summarization failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "SUMMARIZATION_ERROR",
                    format!("Summarization failed: {}", err),
                )
            }
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
