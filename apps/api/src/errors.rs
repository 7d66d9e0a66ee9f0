use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::store::StoreError;
use crate::contact::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so axum handlers can return `Result<T, AppError>`.
///
/// Validation, malformed ids and not-found are expected, user-triggerable
/// outcomes and are never logged as incidents; only store faults are.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid id format")]
    InvalidId,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wraps a store fault with the failing operation's client-facing message.
    pub fn store(message: &'static str, source: StoreError) -> Self {
        AppError::Store { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                let body = Json(json!({
                    "message": "Failed to submit contact message",
                    "error": err.violations,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::InvalidId => {
                let body = Json(json!({ "message": "Invalid ID format" }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound(msg) => {
                let body = Json(json!({ "message": msg }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Store { message, source } => {
                tracing::error!("{message}: {source}");
                let body = Json(json!({
                    "message": message,
                    "error": source.to_string(),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
