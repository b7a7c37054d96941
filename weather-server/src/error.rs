use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Client-facing API errors.
///
/// Messages are fixed per route and never leak upstream detail; the
/// underlying cause is logged server-side by the handler instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing.
    #[error("{0}")]
    Validation(&'static str),

    /// Upstream lookup or storage failed.
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
