use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, instrument};

use super::error::GatewayError;
use super::payload::{VerifyRequest, VerifyResponse};
use super::state::AppState;
use super::{TITLE_GUARD_STATUS_ACCEPTED, TITLE_GUARD_STATUS_HEADER, TITLE_GUARD_STATUS_REJECTED};
use crate::embedding::EmbeddingProvider;
use crate::engine::VerificationResult;

#[instrument(skip(state, payload), fields(title_len = tracing::field::Empty))]
pub async fn verify_title_handler<E>(
    State(state): State<AppState<E>>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    E: EmbeddingProvider + 'static,
{
    let Json(request) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(GatewayError::EmptyTitle);
    }
    tracing::Span::current().record("title_len", title.len());

    let engine = Arc::clone(&state.engine);
    let result = tokio::task::spawn_blocking(move || engine.verify(&title))
        .await
        .map_err(|e| GatewayError::InternalError(format!("Verification task failed: {}", e)))?
        .inspect_err(|e| error!(error = %e, "Verification failed"))?;

    debug!(
        status = result.status.as_str(),
        reason = result.reason_code(),
        score = result.similarity_score,
        "Verification complete"
    );

    Ok(make_response(&result))
}

pub(crate) fn make_response(result: &VerificationResult) -> Response {
    let status = if result.is_accepted() {
        TITLE_GUARD_STATUS_ACCEPTED
    } else {
        TITLE_GUARD_STATUS_REJECTED
    };

    let mut headers = HeaderMap::new();
    headers.insert(TITLE_GUARD_STATUS_HEADER, HeaderValue::from_static(status));

    (StatusCode::OK, headers, Json(VerifyResponse::from(result))).into_response()
}
