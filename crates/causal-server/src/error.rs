//! Error types for the HTTP API.
//!
//! [`ApiError`] converts into an Axum response with a JSON body of the form
//! `{"error": "<message>", "status": <code>}`. Malformed request bodies never
//! reach this type; Axum's extractor rejections answer those.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use causal_core::CausalError;

/// Errors that can occur while serving an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was well-formed but its content was rejected.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<CausalError> for ApiError {
    fn from(err: CausalError) -> Self {
        match err {
            CausalError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
