//! Home page and health check

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::views::{HtmlTemplate, IndexTemplate};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /
///
/// Render the inventory page. Consumes the pending error and edit item.
pub async fn home(State(state): State<AppState>) -> Response {
    match state.warehouse_service.snapshot().await {
        Ok(data) => HtmlTemplate(IndexTemplate::from(data)).into_response(),
        Err(e) => e.into_response_with_debug(state.config.debug),
    }
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
