//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by a handler, rendered as `{ "error": <message> }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is malformed or fails validation.
    #[error("{0}")]
    BadRequest(String),

    /// Missing or wrong bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// The webhook handshake was refused.
    #[error("Forbidden")]
    Forbidden,

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The record clashes with an existing one.
    #[error("{0}")]
    Conflict(String),

    /// Something failed on this side; the message is safe to show.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Builds a [`ApiError::BadRequest`].
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Builds a [`ApiError::Internal`].
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
