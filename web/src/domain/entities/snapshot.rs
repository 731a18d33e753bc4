//! Page snapshot
//!
//! Everything the home page needs to render the current state.

use serde::Serialize;

use super::item::Item;

/// State of the inventory as seen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarehouseData {
    /// Name of the selected warehouse
    pub current_warehouse: Option<String>,
    /// All warehouse names, in creation order
    pub warehouses: Vec<String>,
    /// Items of the selected warehouse ordered by ID; `None` without a selection
    pub items: Option<Vec<Item>>,
    /// Item requested for editing by the previous action
    pub edit_item: Option<Item>,
    /// Most recent input error
    pub error_message: Option<String>,
}
