//! Domain layer
//!
//! Inventory business concepts with no storage or HTTP dependencies.
//! - `entities`: Warehouses, items and the page snapshot
//! - `ports`: Repository traits implemented by adapters

pub mod entities;
pub mod ports;
