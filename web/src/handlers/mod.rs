//! HTTP handlers
//!
//! Axum request handlers. Every form action redirects back to the home page;
//! input problems show up there as the pending error message.

pub mod home;
pub mod items;
pub mod warehouses;

use axum::response::{IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::AppState;

pub use home::{health, home, not_found};
pub use items::{add_item, delete_item, edit_item, edit_quantity, save_edit};
pub use warehouses::{add_warehouse, delete_warehouse, select_warehouse};

/// Redirect to `/` after a form action, or report a storage failure.
fn back_home(state: &AppState, result: Result<(), AppError>) -> Response {
    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => e.into_response_with_debug(state.config.debug),
    }
}
