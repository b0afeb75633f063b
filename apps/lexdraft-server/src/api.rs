//! API handlers for the Lexdraft server
//!
//! Provides REST endpoints for:
//! - Contract drafting from templates
//! - Clause review of uploaded contracts
//! - Judgment summarization
//! - Document text extraction

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServerError;
use crate::AppState;

use clause_engine::ClauseEngine;
use doc_extract::DocumentKind;
use shared_types::{ContractRequest, MAX_DURATION_MONTHS, MIN_DURATION_MONTHS};
use summarize_core::summarize_document;

/// Characters of source text shown back to the user before review or
/// summarization.
const PREVIEW_CHARS: usize = 2000;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lexdraft-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Contract type list response
#[derive(Serialize)]
pub struct ContractTypesResponse {
    pub success: bool,
    pub templates: Vec<draft_engine::TemplateInfo>,
    pub count: usize,
}

/// Handler: GET /api/contract-types
pub async fn handle_list_contract_types() -> Json<ContractTypesResponse> {
    let templates = draft_engine::list_templates();
    let count = templates.len();

    Json(ContractTypesResponse {
        success: true,
        templates,
        count,
    })
}

/// Draft response
#[derive(Serialize)]
pub struct DraftResponse {
    pub success: bool,
    pub contract_text: String,
}

/// Handler: POST /api/draft
pub async fn handle_draft(
    Json(req): Json<ContractRequest>,
) -> Result<Json<DraftResponse>, ServerError> {
    info!("Draft request: contract_type={:?}", req.contract_type);
    validate_contract_request(&req)?;

    let document = draft_engine::draft_contract(&req);

    Ok(Json(DraftResponse {
        success: true,
        contract_text: document.text,
    }))
}

fn validate_contract_request(req: &ContractRequest) -> Result<(), ServerError> {
    if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&req.duration_months) {
        return Err(ServerError::InvalidRequest(format!(
            "duration_months must be between {} and {}, got {}",
            MIN_DURATION_MONTHS, MAX_DURATION_MONTHS, req.duration_months
        )));
    }

    for (field, value) in [
        ("party1", &req.party1),
        ("party2", &req.party2),
        ("location", &req.location),
    ] {
        if value.trim().is_empty() {
            return Err(ServerError::InvalidRequest(format!(
                "{} must not be blank",
                field
            )));
        }
    }

    Ok(())
}

/// An uploaded or inline document.
///
/// Review and summarize accept either inline `text` or an uploaded file
/// as base64 plus its MIME type. Inline text wins when both are given.
#[derive(Deserialize)]
pub struct DocumentPayload {
    #[serde(default)]
    pub text: Option<String>,

    /// Base64-encoded file content
    #[serde(default)]
    pub content_base64: Option<String>,

    /// MIME type of the upload: "text/plain" or "application/pdf"
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Resolve a payload into document text, decoding and extracting as
/// needed.
fn resolve_document_text(payload: &DocumentPayload) -> Result<String, ServerError> {
    if let Some(text) = &payload.text {
        return Ok(text.clone());
    }

    let (content_base64, content_type) = match (&payload.content_base64, &payload.content_type) {
        (Some(content), Some(mime)) => (content, mime),
        _ => {
            return Err(ServerError::InvalidRequest(
                "provide either 'text' or both 'content_base64' and 'content_type'".to_string(),
            ))
        }
    };

    let kind = DocumentKind::from_content_type(content_type).ok_or_else(|| {
        ServerError::InvalidRequest(format!(
            "unsupported content type '{}'; expected text/plain or application/pdf",
            content_type
        ))
    })?;

    let bytes = BASE64
        .decode(content_base64)
        .map_err(|e| ServerError::InvalidRequest(format!("invalid base64 content: {}", e)))?;

    Ok(doc_extract::extract_text(kind, &bytes)?)
}

/// First `PREVIEW_CHARS` characters of the document text.
fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Extraction response
#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub preview: String,
}

/// Handler: POST /api/extract
pub async fn handle_extract(
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<ExtractResponse>, ServerError> {
    let text = resolve_document_text(&payload)?;
    info!("Extracted document: {} chars", text.chars().count());

    let preview = preview(&text);
    Ok(Json(ExtractResponse {
        success: true,
        text,
        preview,
    }))
}

/// Clause review response
#[derive(Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub all_present: bool,
    pub missing_clauses: Vec<String>,
}

/// Handler: POST /api/review
pub async fn handle_review(
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<ReviewResponse>, ServerError> {
    let text = resolve_document_text(&payload)?;

    let engine = ClauseEngine::new();
    let result = engine.review(&text);

    info!(
        "Clause review: {} of {} clauses missing",
        result.missing_clauses.len(),
        clause_engine::CLAUSE_CATALOG.len()
    );

    Ok(Json(ReviewResponse {
        success: true,
        all_present: result.all_present(),
        missing_clauses: result.missing_clauses,
    }))
}

/// Summarization response
#[derive(Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary_text: String,
    pub preview: String,
}

/// Handler: POST /api/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<SummarizeResponse>, ServerError> {
    let text = resolve_document_text(&payload)?;
    info!("Summarize request: {} chars", text.chars().count());

    let summary_text = summarize_document(state.summarizer.as_ref(), &text).await?;

    Ok(Json(SummarizeResponse {
        success: true,
        summary_text,
        preview: preview(&text),
    }))
}
