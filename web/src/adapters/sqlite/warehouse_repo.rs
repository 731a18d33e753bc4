//! SQLite adapter for WarehouseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Warehouse, WarehouseId, WarehouseName};
use crate::domain::ports::WarehouseRepository;
use crate::entity::{items, warehouses};
use crate::error::DomainError;

/// SQLite implementation of WarehouseRepository
pub struct SqliteWarehouseRepository {
    db: DatabaseConnection,
}

impl SqliteWarehouseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WarehouseRepository for SqliteWarehouseRepository {
    async fn list(&self) -> Result<Vec<Warehouse>, DomainError> {
        let results = warehouses::Entity::find()
            .order_by_asc(warehouses::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Warehouse>, DomainError> {
        let result = warehouses::Entity::find()
            .filter(warehouses::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(
        &self,
        name: &WarehouseName,
        copy_from: Option<WarehouseId>,
    ) -> Result<Warehouse, DomainError> {
        let txn = self.db.begin().await?;

        let created = warehouses::ActiveModel {
            name: Set(name.as_str().to_string()),
            next_item_id: Set(1),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(source) = copy_from {
            let source_items = items::Entity::find()
                .filter(items::Column::WarehouseId.eq(source.0))
                .order_by_asc(items::Column::ItemId)
                .all(&txn)
                .await?;

            if let Some(max_id) = source_items.iter().map(|m| m.item_id).max() {
                let copies = source_items.into_iter().map(|m| items::ActiveModel {
                    warehouse_id: Set(created.id),
                    item_id: Set(m.item_id),
                    name: Set(m.name),
                    quantity: Set(0),
                    other: Set(m.other),
                });
                let copied = items::Entity::insert_many(copies)
                    .exec_without_returning(&txn)
                    .await?;

                let mut active = created.clone().into_active_model();
                active.next_item_id = Set(max_id.saturating_add(1));
                active.update(&txn).await?;

                tracing::debug!(
                    "Copied {} item types from warehouse {} into {}",
                    copied,
                    source,
                    created.name
                );
            }
        }

        txn.commit().await?;

        Ok(created.into())
    }

    async fn delete(&self, id: WarehouseId) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        items::Entity::delete_many()
            .filter(items::Column::WarehouseId.eq(id.0))
            .exec(&txn)
            .await?;

        let result = warehouses::Entity::delete_by_id(id.0).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Warehouse {} not found", id)));
        }

        txn.commit().await?;
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<warehouses::Model> for Warehouse {
    fn from(model: warehouses::Model) -> Self {
        Warehouse {
            id: WarehouseId(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
