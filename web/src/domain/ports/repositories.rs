//! Repository port traits
//!
//! These traits define the interface for inventory persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::{
    Item, ItemId, ItemUpdate, NewItem, Warehouse, WarehouseId, WarehouseName,
};
use crate::error::DomainError;

/// Repository for Warehouse entities
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// List all warehouses in creation order
    async fn list(&self) -> Result<Vec<Warehouse>, DomainError>;

    /// Find a warehouse by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Warehouse>, DomainError>;

    /// Create a warehouse.
    ///
    /// When `copy_from` is set, every item of that warehouse is copied into
    /// the new one with its quantity reset to zero.
    async fn create(
        &self,
        name: &WarehouseName,
        copy_from: Option<WarehouseId>,
    ) -> Result<Warehouse, DomainError>;

    /// Delete a warehouse together with its items
    async fn delete(&self, id: WarehouseId) -> Result<(), DomainError>;
}

/// Repository for Item entities, always scoped to one warehouse
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List the items of a warehouse ordered by ID
    async fn list(&self, warehouse: WarehouseId) -> Result<Vec<Item>, DomainError>;

    /// Find an item by ID
    async fn find(&self, warehouse: WarehouseId, id: ItemId)
        -> Result<Option<Item>, DomainError>;

    /// Check whether an item ID is in use
    async fn exists(&self, warehouse: WarehouseId, id: ItemId) -> Result<bool, DomainError> {
        Ok(self.find(warehouse, id).await?.is_some())
    }

    /// Create an item with the next free ID.
    ///
    /// IDs follow SQLite AUTOINCREMENT rules: the new ID is larger than any
    /// ID the warehouse has ever assigned automatically and any ID in use.
    async fn create(&self, warehouse: WarehouseId, item: &NewItem) -> Result<Item, DomainError>;

    /// Overwrite an item's quantity
    async fn set_quantity(
        &self,
        warehouse: WarehouseId,
        id: ItemId,
        quantity: i64,
    ) -> Result<(), DomainError>;

    /// Replace all fields of the item currently stored under `old_id`
    async fn update(
        &self,
        warehouse: WarehouseId,
        old_id: ItemId,
        update: &ItemUpdate,
    ) -> Result<(), DomainError>;

    /// Delete an item; returns whether a row was removed
    async fn delete(&self, warehouse: WarehouseId, id: ItemId) -> Result<bool, DomainError>;
}
