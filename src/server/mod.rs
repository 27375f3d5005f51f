//! HTTP service exposing the analysis to browser front-ends.
//!
//! ## Endpoints
//! - `POST /api/analyze` with `{ "entries": [string] }`
//! - `GET /health`
//!
//! Requests are independent; the only shared state is the provider.

use crate::ai::CompletionProvider;
use crate::constants::APP_NAME;
use crate::errors::{AnalysisError, AppResult};
use crate::ops::{analyze_entries, entries_from_json};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// State shared by all handlers.
struct AppState<P> {
    provider: P,
}

/// Successful analysis body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRes {
    pub insights: String,
}

/// Error body for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorRes {
    pub error: String,
}

/// Health check body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::InvalidInput => StatusCode::BAD_REQUEST,
            AnalysisError::ProviderFailure => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorRes {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds the router around `provider`.
pub fn router<P>(provider: P) -> Router
where
    P: CompletionProvider + 'static,
{
    let state = Arc::new(AppState { provider });

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze::<P>))
        // entry lists have no size cap
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves until ctrl-c.
///
/// # Errors
///
/// Returns `AppError::Io` if the address cannot be bound or the server fails.
pub async fn serve<P>(addr: &str, provider: P) -> AppResult<()>
where
    P: CompletionProvider + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(provider))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: format!("{} is alive", APP_NAME),
    })
}

/// Analyzes the entries in the request body.
///
/// A body that cannot be read or parsed is answered like a provider failure
/// (500); a body without a usable `entries` array is a 400.
async fn analyze<P: CompletionProvider>(
    State(state): State<Arc<AppState<P>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeRes>, AnalysisError> {
    let body = body.map_err(|e| {
        warn!("Rejecting unreadable analyze request body: {}", e);
        AnalysisError::ProviderFailure
    })?;

    let request: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejecting unparseable analyze request: {}", e);
        AnalysisError::ProviderFailure
    })?;

    let entries = entries_from_json(request.get("entries"))?;
    let insights = analyze_entries(&state.provider, &entries).await?;

    Ok(Json(AnalyzeRes { insights }))
}
