//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod item_repo;
pub mod warehouse_repo;


use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::{items, warehouses};
use crate::error::DomainError;

pub use item_repo::SqliteItemRepository;
pub use warehouse_repo::SqliteWarehouseRepository;

/// Open the database at `url` and create any missing tables.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    if url.contains(":memory:") {
        // Every pooled connection would otherwise see its own empty database.
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Create the inventory tables if they do not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema
            .create_table_from_entity(warehouses::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(items::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in statements {
        db.execute(backend.build(&stmt)).await?;
    }

    tracing::debug!("Database schema ready");
    Ok(())
}
