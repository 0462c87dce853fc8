use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::TITLE_GUARD_STATUS_HEADER;
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("verification failed: {0}")]
    VerificationFailed(#[from] EngineError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, title_guard_status) = match &self {
            GatewayError::EmptyTitle => (StatusCode::BAD_REQUEST, "empty_title"),
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::VerificationFailed(e) if e.is_configuration() => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            GatewayError::VerificationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error")
            }
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            TITLE_GUARD_STATUS_HEADER,
            HeaderValue::from_static(title_guard_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
