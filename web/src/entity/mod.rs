//! SeaORM entities
//!
//! Table definitions used by the SQLite adapters.

pub mod items;
pub mod warehouses;
