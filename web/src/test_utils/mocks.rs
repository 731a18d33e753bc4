//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Item, ItemId, ItemUpdate, NewItem, Warehouse, WarehouseId, WarehouseName,
};
use crate::domain::ports::{ItemRepository, WarehouseRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Item Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<(WarehouseId, ItemId), Item>>>,
    next_ids: Arc<RwLock<HashMap<WarehouseId, i64>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item for testing
    pub fn with_item(self, item: Item) -> Self {
        {
            let mut next_ids = self.next_ids.write().unwrap();
            let next = next_ids.entry(item.warehouse_id).or_insert(1);
            *next = (*next).max(item.id.0 + 1);
            self.items
                .write()
                .unwrap()
                .insert((item.warehouse_id, item.id), item);
        }
        self
    }

    /// Total number of stored items across all warehouses
    pub fn count(&self) -> usize {
        self.items.read().unwrap().len()
    }

    fn copy_types(&self, from: WarehouseId, to: WarehouseId) {
        let mut items = self.items.write().unwrap();
        let copies: Vec<Item> = items
            .values()
            .filter(|i| i.warehouse_id == from)
            .map(|i| Item {
                warehouse_id: to,
                quantity: 0,
                ..i.clone()
            })
            .collect();

        if let Some(max) = copies.iter().map(|i| i.id.0).max() {
            self.next_ids.write().unwrap().insert(to, max + 1);
        }
        for item in copies {
            items.insert((to, item.id), item);
        }
    }

    fn remove_warehouse(&self, warehouse: WarehouseId) {
        self.items
            .write()
            .unwrap()
            .retain(|(w, _), _| *w != warehouse);
        self.next_ids.write().unwrap().remove(&warehouse);
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self, warehouse: WarehouseId) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items
            .values()
            .filter(|i| i.warehouse_id == warehouse)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        warehouse: WarehouseId,
        id: ItemId,
    ) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items.get(&(warehouse, id)).cloned())
    }

    async fn create(&self, warehouse: WarehouseId, new_item: &NewItem) -> Result<Item, DomainError> {
        let mut items = self.items.write().unwrap();
        let mut next_ids = self.next_ids.write().unwrap();

        let max_existing = items
            .keys()
            .filter(|(w, _)| *w == warehouse)
            .map(|(_, id)| id.0)
            .max();
        let next = next_ids.entry(warehouse).or_insert(1);
        let id = max_existing.map_or(*next, |max| (*next).max(max + 1));
        *next = id + 1;

        let item = Item {
            warehouse_id: warehouse,
            id: ItemId(id),
            name: new_item.name.clone(),
            quantity: new_item.quantity,
            other: new_item.other.clone(),
        };
        items.insert((warehouse, item.id), item.clone());
        Ok(item)
    }

    async fn set_quantity(
        &self,
        warehouse: WarehouseId,
        id: ItemId,
        quantity: i64,
    ) -> Result<(), DomainError> {
        let mut items = self.items.write().unwrap();
        let item = items
            .get_mut(&(warehouse, id))
            .ok_or_else(|| DomainError::NotFound(format!("Item {} not found", id)))?;
        item.quantity = quantity;
        Ok(())
    }

    async fn update(
        &self,
        warehouse: WarehouseId,
        old_id: ItemId,
        update: &ItemUpdate,
    ) -> Result<(), DomainError> {
        let mut items = self.items.write().unwrap();
        if old_id != update.id && items.contains_key(&(warehouse, update.id)) {
            return Err(DomainError::Database(format!(
                "UNIQUE constraint failed: item {}",
                update.id
            )));
        }
        items
            .remove(&(warehouse, old_id))
            .ok_or_else(|| DomainError::NotFound(format!("Item {} not found", old_id)))?;
        items.insert(
            (warehouse, update.id),
            Item {
                warehouse_id: warehouse,
                id: update.id,
                name: update.name.clone(),
                quantity: update.quantity,
                other: update.other.clone(),
            },
        );
        Ok(())
    }

    async fn delete(&self, warehouse: WarehouseId, id: ItemId) -> Result<bool, DomainError> {
        let mut items = self.items.write().unwrap();
        Ok(items.remove(&(warehouse, id)).is_some())
    }
}

// ============================================================================
// In-Memory Warehouse Repository
// ============================================================================

/// In-memory warehouses; shares the item store so copies and deletes cascade
pub struct InMemoryWarehouseRepository {
    warehouses: Arc<RwLock<Vec<Warehouse>>>,
    items: Arc<InMemoryItemRepository>,
}

impl InMemoryWarehouseRepository {
    pub fn new(items: Arc<InMemoryItemRepository>) -> Self {
        Self {
            warehouses: Arc::new(RwLock::new(Vec::new())),
            items,
        }
    }

    /// Pre-populate with a warehouse for testing
    pub fn with_warehouse(self, warehouse: Warehouse) -> Self {
        self.warehouses.write().unwrap().push(warehouse);
        self
    }
}

#[async_trait]
impl WarehouseRepository for InMemoryWarehouseRepository {
    async fn list(&self) -> Result<Vec<Warehouse>, DomainError> {
        Ok(self.warehouses.read().unwrap().clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Warehouse>, DomainError> {
        let warehouses = self.warehouses.read().unwrap();
        Ok(warehouses.iter().find(|w| w.name == name).cloned())
    }

    async fn create(
        &self,
        name: &WarehouseName,
        copy_from: Option<WarehouseId>,
    ) -> Result<Warehouse, DomainError> {
        let warehouse = {
            let mut warehouses = self.warehouses.write().unwrap();
            if warehouses.iter().any(|w| w.name == name.as_str()) {
                return Err(DomainError::Database(format!(
                    "UNIQUE constraint failed: warehouses.name {}",
                    name
                )));
            }
            let id = warehouses.iter().map(|w| w.id.0).max().unwrap_or(0) + 1;
            let warehouse = Warehouse {
                id: WarehouseId(id),
                name: name.as_str().to_string(),
                created_at: Utc::now(),
            };
            warehouses.push(warehouse.clone());
            warehouse
        };

        if let Some(source) = copy_from {
            self.items.copy_types(source, warehouse.id);
        }
        Ok(warehouse)
    }

    async fn delete(&self, id: WarehouseId) -> Result<(), DomainError> {
        let mut warehouses = self.warehouses.write().unwrap();
        let before = warehouses.len();
        warehouses.retain(|w| w.id != id);
        if warehouses.len() == before {
            return Err(DomainError::NotFound(format!("Warehouse {} not found", id)));
        }
        self.items.remove_warehouse(id);
        Ok(())
    }
}

// ============================================================================
// Failing Warehouse Repository
// ============================================================================

/// Warehouse repository whose storage is always unavailable
pub struct FailingWarehouseRepository;

fn unavailable() -> DomainError {
    DomainError::Database("database is locked".to_string())
}

#[async_trait]
impl WarehouseRepository for FailingWarehouseRepository {
    async fn list(&self) -> Result<Vec<Warehouse>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Warehouse>, DomainError> {
        Err(unavailable())
    }

    async fn create(
        &self,
        _name: &WarehouseName,
        _copy_from: Option<WarehouseId>,
    ) -> Result<Warehouse, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: WarehouseId) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
