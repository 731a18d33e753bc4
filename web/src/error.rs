//! Unified error types for the Stockroom web app
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Message to show the user, if this error was caused by their input.
    ///
    /// Storage failures return `None` and must be propagated.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            DomainError::NotFound(msg)
            | DomainError::AlreadyExists(msg)
            | DomainError::Validation(msg) => Some(msg),
            DomainError::Database(_) => None,
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// Status, short error label and optional details for the response body.
    ///
    /// Internal details are only included when `debug` is set.
    fn parts(&self, debug: bool) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    debug.then(|| msg.clone()),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        }
    }

    /// Build a response, exposing internal details only in debug mode.
    pub fn into_response_with_debug(self, debug: bool) -> Response {
        let (status, error, details) = self.parts(debug);
        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with_debug(false)
    }
}
