//! SQLite adapter for ItemRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Item, ItemId, ItemUpdate, NewItem, WarehouseId};
use crate::domain::ports::ItemRepository;
use crate::entity::{items, warehouses};
use crate::error::DomainError;

/// SQLite implementation of ItemRepository
pub struct SqliteItemRepository {
    db: DatabaseConnection,
}

impl SqliteItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Pick the next automatic item ID.
///
/// Mirrors SQLite AUTOINCREMENT: the ID exceeds both the warehouse's
/// recorded sequence and every ID currently in use. Returns `None` once the
/// ID space is exhausted.
pub fn allocate_item_id(next_item_id: i64, max_existing: Option<i64>) -> Option<i64> {
    match max_existing {
        Some(max) => Some(next_item_id.max(max.checked_add(1)?)),
        None => Some(next_item_id),
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self, warehouse: WarehouseId) -> Result<Vec<Item>, DomainError> {
        let results = items::Entity::find()
            .filter(items::Column::WarehouseId.eq(warehouse.0))
            .order_by_asc(items::Column::ItemId)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find(
        &self,
        warehouse: WarehouseId,
        id: ItemId,
    ) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find_by_id((warehouse.0, id.0))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, warehouse: WarehouseId, item: &NewItem) -> Result<Item, DomainError> {
        let txn = self.db.begin().await?;

        let owner = warehouses::Entity::find_by_id(warehouse.0)
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Warehouse {} not found", warehouse)))?;

        let max_existing = items::Entity::find()
            .filter(items::Column::WarehouseId.eq(warehouse.0))
            .order_by_desc(items::Column::ItemId)
            .one(&txn)
            .await?
            .map(|m| m.item_id);

        let id = allocate_item_id(owner.next_item_id, max_existing).ok_or_else(|| {
            DomainError::Validation("No item IDs left in this warehouse".to_string())
        })?;

        items::Entity::insert(items::ActiveModel {
            warehouse_id: Set(warehouse.0),
            item_id: Set(id),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            other: Set(item.other.clone()),
        })
        .exec_without_returning(&txn)
        .await?;

        warehouses::ActiveModel {
            id: Set(owner.id),
            next_item_id: Set(id.saturating_add(1)),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;

        Ok(Item {
            warehouse_id: warehouse,
            id: ItemId(id),
            name: item.name.clone(),
            quantity: item.quantity,
            other: item.other.clone(),
        })
    }

    async fn set_quantity(
        &self,
        warehouse: WarehouseId,
        id: ItemId,
        quantity: i64,
    ) -> Result<(), DomainError> {
        let result = items::Entity::update_many()
            .col_expr(items::Column::Quantity, Expr::value(quantity))
            .filter(items::Column::WarehouseId.eq(warehouse.0))
            .filter(items::Column::ItemId.eq(id.0))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Item {} not found in warehouse {}",
                id, warehouse
            )));
        }

        Ok(())
    }

    async fn update(
        &self,
        warehouse: WarehouseId,
        old_id: ItemId,
        update: &ItemUpdate,
    ) -> Result<(), DomainError> {
        let result = items::Entity::update_many()
            .col_expr(items::Column::ItemId, Expr::value(update.id.0))
            .col_expr(items::Column::Name, Expr::value(update.name.clone()))
            .col_expr(items::Column::Quantity, Expr::value(update.quantity))
            .col_expr(items::Column::Other, Expr::value(update.other.clone()))
            .filter(items::Column::WarehouseId.eq(warehouse.0))
            .filter(items::Column::ItemId.eq(old_id.0))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Item {} not found in warehouse {}",
                old_id, warehouse
            )));
        }

        Ok(())
    }

    async fn delete(&self, warehouse: WarehouseId, id: ItemId) -> Result<bool, DomainError> {
        let result = items::Entity::delete_many()
            .filter(items::Column::WarehouseId.eq(warehouse.0))
            .filter(items::Column::ItemId.eq(id.0))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Item {
            warehouse_id: WarehouseId(model.warehouse_id),
            id: ItemId(model.item_id),
            name: model.name,
            quantity: model.quantity,
            other: model.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_uses_sequence_start() {
        assert_eq!(allocate_item_id(1, None), Some(1));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        // Items 1..=5 were created, 5 was deleted: sequence says 6, max in use is 4.
        assert_eq!(allocate_item_id(6, Some(4)), Some(6));
    }

    #[test]
    fn renumbered_item_pushes_next_id() {
        // An item was renumbered to 100 after the sequence reached 3.
        assert_eq!(allocate_item_id(3, Some(100)), Some(101));
    }

    #[test]
    fn exhausted_id_space() {
        assert_eq!(allocate_item_id(1, Some(i64::MAX)), None);
    }
}
