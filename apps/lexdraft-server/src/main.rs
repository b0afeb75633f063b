//! Lexdraft API Server
//!
//! Backend for a browser-based legal document assistant. Provides REST
//! API endpoints for:
//!
//! - Contract drafting from embedded templates
//! - Clause review of uploaded contracts (missing-clause detection)
//! - Abstractive summarization of court judgments
//! - Document text extraction (plain text / PDF uploads)
//!
//! ## Architecture
//!
//! The three flows are stateless and independent; the only process-wide
//! state is the summarization backend handle, constructed once at
//! startup and injected into handlers through [`AppState`] so the
//! chunk-and-reduce pipeline stays testable against a stand-in backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use summarize_core::{InferenceSummarizer, Summarizer};

mod api;
mod error;

use api::{
    handle_draft, handle_extract, handle_health, handle_list_contract_types, handle_review,
    handle_summarize,
};

/// Command-line arguments for the Lexdraft server
#[derive(Parser, Debug)]
#[command(name = "lexdraft-server")]
#[command(about = "Lexdraft server for contract drafting, clause review, and summarization")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Base URL of the summarization inference backend
    #[arg(long, default_value = "https://api-inference.huggingface.co")]
    summarizer_url: String,

    /// Summarization model name
    #[arg(long, default_value = "sshleifer/distilbart-cnn-12-6")]
    summarizer_model: String,

    /// Per-chunk summarization timeout in seconds
    #[arg(long, default_value = "120")]
    summarizer_timeout_secs: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Summarization backend, constructed once at startup
    pub summarizer: Arc<dyn Summarizer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lexdraft server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Construct the summarization backend once; handlers get a handle.
    let summarizer = InferenceSummarizer::new(
        args.summarizer_url.as_str(),
        args.summarizer_model.as_str(),
        Duration::from_secs(args.summarizer_timeout_secs),
    )?;

    let state = AppState {
        summarizer: Arc::new(summarizer),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/contract-types", get(handle_list_contract_types))
        .route("/api/draft", post(handle_draft))
        .route("/api/extract", post(handle_extract))
        .route("/api/review", post(handle_review))
        .route("/api/summarize", post(handle_summarize))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!(
        "Summarization backend: {} ({})",
        args.summarizer_url, args.summarizer_model
    );

    axum::serve(listener, app).await?;

    Ok(())
}
