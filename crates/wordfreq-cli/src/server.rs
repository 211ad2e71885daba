//! HTTP server setup and routing

use anyhow::Context;
use axum::{
    Json, Router,
    body::Bytes,
    extract::DefaultBodyLimit,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use wordfreq_core::{AnalysisResult, AnalyzeError, analyze};

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Analyze request body
#[derive(Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    text: String,
}

/// Successful analysis response
#[derive(Serialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(flatten)]
    result: AnalysisResult,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Failure of a single API request.
#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Validation(#[from] AnalyzeError),

    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.user_message().to_string()),
            ApiError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        } else {
            debug!(error = %self, "Rejected request");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Landing page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Script for the landing page
async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Analyze the posted text.
///
/// Bodies that do not decode as `{"text": string}` are a 500, not an
/// extractor rejection.
async fn analyze_text(body: Bytes) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Unexpected(e.to_string()))?;

    let result = analyze(&request.text)?;
    debug!(
        total_words = result.total_words,
        unique_words = result.unique_words,
        "Analyzed text"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}

/// 404 handler
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Build the axum router
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/health", get(health))
        // input length is unbounded
        .route(
            "/analyze",
            post(analyze_text).layer(DefaultBodyLimit::disable()),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Run the server.
///
/// This function blocks until the server is shut down.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    axum::serve(listener, build_router())
        .await
        .context("Server error")?;

    Ok(())
}
