//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod item;
pub mod snapshot;
pub mod warehouse;

pub use item::{parse_int, Item, ItemId, ItemUpdate, NewItem};
pub use snapshot::WarehouseData;
pub use warehouse::{Warehouse, WarehouseId, WarehouseName};
