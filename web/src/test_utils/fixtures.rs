//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Item, ItemId, Warehouse, WarehouseId};

/// Create a test warehouse
pub fn test_warehouse(id: i32, name: &str) -> Warehouse {
    Warehouse {
        id: WarehouseId(id),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test item with a quantity of 5
pub fn test_item(warehouse: WarehouseId, id: i64, name: &str) -> Item {
    Item {
        warehouse_id: warehouse,
        id: ItemId(id),
        name: name.to_string(),
        quantity: 5,
        other: String::new(),
    }
}
