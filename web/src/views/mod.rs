//! HTML views
//!
//! Askama templates for the inventory page and the conversion from the
//! domain snapshot into template-friendly rows.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::entities::{Item, WarehouseData};

/// Quantity buttons shown next to every item
pub const QUANTITY_STEPS: [i64; 4] = [-10, -1, 1, 10];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_warehouse: Option<String>,
    pub warehouses: Vec<WarehouseTab>,
    pub items: Option<Vec<ItemRow>>,
    pub edit_item: Option<ItemRow>,
    pub error_message: Option<String>,
    pub quantity_steps: Vec<QuantityStep>,
}

/// A warehouse selector button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseTab {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub other: String,
}

/// A quantity adjustment button: `delta` is submitted, `label` is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityStep {
    pub delta: i64,
    pub label: String,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        ItemRow {
            id: item.id.0,
            name: item.name,
            quantity: item.quantity,
            other: item.other,
        }
    }
}

impl From<WarehouseData> for IndexTemplate {
    fn from(data: WarehouseData) -> Self {
        let warehouses = data
            .warehouses
            .into_iter()
            .map(|name| WarehouseTab {
                selected: data.current_warehouse.as_deref() == Some(name.as_str()),
                name,
            })
            .collect();

        IndexTemplate {
            current_warehouse: data.current_warehouse,
            warehouses,
            items: data
                .items
                .map(|items| items.into_iter().map(ItemRow::from).collect()),
            edit_item: data.edit_item.map(ItemRow::from),
            error_message: data.error_message,
            quantity_steps: QUANTITY_STEPS
                .iter()
                .map(|&delta| QuantityStep {
                    delta,
                    label: format!("{:+}", delta),
                })
                .collect(),
        }
    }
}

/// Wrapper rendering any askama template as an HTML response
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}
