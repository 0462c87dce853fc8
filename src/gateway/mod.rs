//! HTTP gateway (Axum) for title verification.
//!
//! This module is primarily used by the `title-guard` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::verify_title_handler;
pub use state::AppState;

use crate::embedding::EmbeddingProvider;

/// Response header carrying a short machine-readable outcome.
pub const TITLE_GUARD_STATUS_HEADER: &str = "x-title-guard-status";
pub const TITLE_GUARD_STATUS_HEALTHY: &str = "healthy";
pub const TITLE_GUARD_STATUS_READY: &str = "ready";
pub const TITLE_GUARD_STATUS_ACCEPTED: &str = "accepted";
pub const TITLE_GUARD_STATUS_REJECTED: &str = "rejected";

pub fn create_router_with_state<E>(state: AppState<E>) -> Router
where
    E: EmbeddingProvider + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<E>))
        .route("/verify_title", post(verify_title_handler::<E>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub corpus_size: usize,
    pub embedding_dim: usize,
    pub embedder_mode: &'static str,
    pub restricted_words: usize,
    pub forbidden_affixes: usize,
}

fn status_headers(status: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TITLE_GUARD_STATUS_HEADER, HeaderValue::from_static(status));
    headers
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        status_headers(TITLE_GUARD_STATUS_HEALTHY),
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// The engine is built before the listener binds, so a running server is always ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<E>(State(state): State<AppState<E>>) -> Response
where
    E: EmbeddingProvider + 'static,
{
    let engine = &state.engine;
    let embedder_mode = if engine.is_embedder_stub() {
        "stub"
    } else {
        "real"
    };

    let components = ComponentStatus {
        corpus_size: engine.corpus().len(),
        embedding_dim: engine.embedding_dim(),
        embedder_mode,
        restricted_words: engine.policy().restricted_word_count(),
        forbidden_affixes: engine.policy().forbidden_affix_count(),
    };

    (
        StatusCode::OK,
        status_headers(TITLE_GUARD_STATUS_READY),
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
