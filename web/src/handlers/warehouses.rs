//! Warehouse handlers
//!
//! Create, select and delete warehouses.

use axum::{extract::State, response::Response, Form};
use serde::Deserialize;

use super::back_home;
use crate::AppState;

/// Form posted by the "Add Warehouse" button
#[derive(Debug, Deserialize)]
pub struct AddWarehouseForm {
    pub warehouse_name: String,
    /// Checkbox; present means checked
    #[serde(default)]
    pub copy_items: Option<String>,
}

/// Form posted by a warehouse selector button
#[derive(Debug, Deserialize)]
pub struct SelectWarehouseForm {
    pub submit_button: String,
}

/// POST /add_warehouse
pub async fn add_warehouse(
    State(state): State<AppState>,
    Form(form): Form<AddWarehouseForm>,
) -> Response {
    tracing::debug!(?form, "add_warehouse");
    let result = state
        .warehouse_service
        .add_warehouse(&form.warehouse_name, form.copy_items.is_some())
        .await;
    back_home(&state, result)
}

/// POST /select_warehouse
pub async fn select_warehouse(
    State(state): State<AppState>,
    Form(form): Form<SelectWarehouseForm>,
) -> Response {
    let result = state
        .warehouse_service
        .select_warehouse(&form.submit_button)
        .await;
    back_home(&state, result)
}

/// POST /delete_warehouse
///
/// Deletes the current warehouse including its inventory.
pub async fn delete_warehouse(State(state): State<AppState>) -> Response {
    let result = state.warehouse_service.delete_warehouse().await;
    back_home(&state, result)
}
