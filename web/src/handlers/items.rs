//! Item handlers
//!
//! Item actions always apply to the current warehouse.

use axum::{extract::State, response::Response, Form};
use serde::Deserialize;

use super::back_home;
use crate::AppState;

/// Form posted by the "Add Item" button
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub item_name: String,
    pub quantity: String,
    #[serde(default)]
    pub other: String,
}

/// Form posted by a per-item button; the button value carries the payload
#[derive(Debug, Deserialize)]
pub struct ItemButtonForm {
    pub submit_button: String,
}

impl ItemButtonForm {
    /// Split an `"<id>,<delta>"` quantity button value.
    ///
    /// A value without a comma yields an empty delta, which fails parsing.
    pub fn id_and_delta(&self) -> (&str, &str) {
        self.submit_button
            .split_once(',')
            .unwrap_or((self.submit_button.as_str(), ""))
    }
}

/// Form posted when an item edit is saved
#[derive(Debug, Deserialize)]
pub struct SaveEditForm {
    pub item_name: String,
    pub id: String,
    pub quantity: String,
    #[serde(default)]
    pub other: String,
    pub old_id: String,
}

/// POST /add_item
pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<AddItemForm>,
) -> Response {
    tracing::debug!(?form, "add_item");
    let result = state
        .warehouse_service
        .add_item(&form.item_name, &form.quantity, &form.other)
        .await;
    back_home(&state, result)
}

/// POST /edit_quantity
///
/// Triggered by the -10/-1/+1/+10 buttons.
pub async fn edit_quantity(
    State(state): State<AppState>,
    Form(form): Form<ItemButtonForm>,
) -> Response {
    let (id, delta) = form.id_and_delta();
    let result = state.warehouse_service.edit_quantity(id, delta).await;
    back_home(&state, result)
}

/// POST /edit_item
///
/// Opens the edit form for an item on the next page render.
pub async fn edit_item(
    State(state): State<AppState>,
    Form(form): Form<ItemButtonForm>,
) -> Response {
    let result = state.warehouse_service.edit_item(&form.submit_button).await;
    back_home(&state, result)
}

/// POST /save_edit
pub async fn save_edit(
    State(state): State<AppState>,
    Form(form): Form<SaveEditForm>,
) -> Response {
    tracing::debug!(?form, "save_edit");
    let result = state
        .warehouse_service
        .save_edit(
            &form.item_name,
            &form.id,
            &form.quantity,
            &form.other,
            &form.old_id,
        )
        .await;
    back_home(&state, result)
}

/// POST /delete_item
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<ItemButtonForm>,
) -> Response {
    let result = state.warehouse_service.delete_item(&form.submit_button).await;
    back_home(&state, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(value: &str) -> ItemButtonForm {
        ItemButtonForm {
            submit_button: value.to_string(),
        }
    }

    #[test]
    fn splits_id_and_delta() {
        assert_eq!(button("3,-10").id_and_delta(), ("3", "-10"));
    }

    #[test]
    fn missing_comma_gives_empty_delta() {
        assert_eq!(button("3").id_and_delta(), ("3", ""));
    }

    #[test]
    fn only_first_comma_splits() {
        assert_eq!(button("3,1,2").id_and_delta(), ("3", "1,2"));
    }
}
