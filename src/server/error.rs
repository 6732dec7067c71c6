//! Error types and response handling for the generate service.
//!
//! Every failure is answered with a JSON body `{"error": "<message>"}` so the
//! form can show the message verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Message returned for a blank letter.
pub const EMPTY_TEXT_MESSAGE: &str = "Пустой текст письма.";

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON or has the wrong shape.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// `incomingText` is missing or blank.
    #[error("{}", EMPTY_TEXT_MESSAGE)]
    EmptyText,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::EmptyText => "empty_text",
            ApiError::NotFound => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(kind = self.error_type(), "request rejected: {}", self);
        (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
