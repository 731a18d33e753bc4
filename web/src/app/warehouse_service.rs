//! Warehouse service
//!
//! The inventory state machine. Besides storage, the service keeps a
//! process-wide session:
//!
//! - the currently selected warehouse, which every item action applies to;
//! - a pending error message, set when an action receives invalid input;
//! - a pending edit item, set when the user asks to edit an item.
//!
//! The pending values are one-shot: [`WarehouseService::snapshot`] returns
//! them and clears them. Invalid input is never an HTTP error; it only
//! leaves a message for the next page render.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::{
    parse_int, Item, ItemId, ItemUpdate, NewItem, Warehouse, WarehouseData, WarehouseName,
};
use crate::domain::ports::{ItemRepository, WarehouseRepository};
use crate::error::{AppError, DomainError};

pub const MSG_DUPLICATE_WAREHOUSE: &str = "Warehouse Name must be unique";
pub const MSG_NO_WAREHOUSE_FOR_ITEM: &str = "Add or select a warehouse to add an item";
pub const MSG_QUANTITY_NOT_INTEGER: &str = "'Quantity' must be an integer";
pub const MSG_EDIT_QUANTITY_NOT_INTEGER: &str = "'Quantity' and ID must be integers.";
pub const MSG_ITEM_MISSING: &str = "Item ID does not exist!";
pub const MSG_EDIT_ITEM_MISSING: &str = "Item ID does not exist";
pub const MSG_QUANTITY_OUT_OF_RANGE: &str = "Quantity is out of range";
pub const MSG_SAVE_QUANTITY_NOT_INTEGER: &str = "'Quantity' must be an integer.";
pub const MSG_IDS_NOT_INTEGER: &str = "IDs must be integers.";
pub const MSG_IDS_NOT_UNIQUE: &str = "IDs must be unique.";

/// Per-process session state
#[derive(Debug, Default)]
struct Session {
    current: Option<Warehouse>,
    error_message: Option<String>,
    edit_item: Option<Item>,
}

impl Session {
    /// Turn input errors into the pending message; pass storage errors on.
    fn record(&mut self, result: Result<(), DomainError>) -> Result<(), AppError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) => match e.user_message() {
                Some(msg) => {
                    tracing::debug!("Rejected input: {}", msg);
                    self.error_message = Some(msg.to_string());
                    Ok(())
                }
                None => Err(e.into()),
            },
        }
    }
}

fn invalid(msg: &str) -> DomainError {
    DomainError::Validation(msg.to_string())
}

/// Service coordinating warehouse and item storage with the session
pub struct WarehouseService<WR, IR>
where
    WR: WarehouseRepository,
    IR: ItemRepository,
{
    warehouses: Arc<WR>,
    items: Arc<IR>,
    session: Mutex<Session>,
}

impl<WR, IR> WarehouseService<WR, IR>
where
    WR: WarehouseRepository,
    IR: ItemRepository,
{
    pub fn new(warehouses: Arc<WR>, items: Arc<IR>) -> Self {
        Self {
            warehouses,
            items,
            session: Mutex::new(Session::default()),
        }
    }

    /// Current state for rendering. Clears the pending error and edit item.
    pub async fn snapshot(&self) -> Result<WarehouseData, AppError> {
        let mut session = self.session.lock().await;

        let warehouses = self
            .warehouses
            .list()
            .await?
            .into_iter()
            .map(|w| w.name)
            .collect();

        let items = match &session.current {
            Some(current) => Some(self.items.list(current.id).await?),
            None => None,
        };

        Ok(WarehouseData {
            current_warehouse: session.current.as_ref().map(|w| w.name.clone()),
            warehouses,
            items,
            edit_item: session.edit_item.take(),
            error_message: session.error_message.take(),
        })
    }

    // ------------------------------------------------------------------
    // Warehouses
    // ------------------------------------------------------------------

    /// Create a warehouse and select it.
    ///
    /// With `copy_items`, the item types of the selected warehouse are
    /// copied with zero quantity.
    pub async fn add_warehouse(&self, raw_name: &str, copy_items: bool) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = self.try_add_warehouse(&mut session, raw_name, copy_items).await;
        session.record(result)
    }

    async fn try_add_warehouse(
        &self,
        session: &mut Session,
        raw_name: &str,
        copy_items: bool,
    ) -> Result<(), DomainError> {
        let name = WarehouseName::normalize(raw_name)?;

        if self.warehouses.find_by_name(name.as_str()).await?.is_some() {
            return Err(DomainError::AlreadyExists(
                MSG_DUPLICATE_WAREHOUSE.to_string(),
            ));
        }

        let copy_from = if copy_items {
            session.current.as_ref().map(|w| w.id)
        } else {
            None
        };

        let warehouse = self.warehouses.create(&name, copy_from).await?;
        tracing::info!(
            warehouse = %warehouse.name,
            copied = copy_from.is_some(),
            "Created warehouse"
        );
        session.current = Some(warehouse);
        Ok(())
    }

    /// Make `name` the current warehouse.
    pub async fn select_warehouse(&self, name: &str) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = self.try_select_warehouse(&mut session, name).await;
        session.record(result)
    }

    async fn try_select_warehouse(
        &self,
        session: &mut Session,
        name: &str,
    ) -> Result<(), DomainError> {
        let warehouse = self
            .warehouses
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("{} is not a warehouse", name)))?;

        if session.current.as_ref().map(|w| w.id) == Some(warehouse.id) {
            return Ok(());
        }

        tracing::info!("Switching to {}", warehouse.name);
        session.current = Some(warehouse);
        Ok(())
    }

    /// Delete the current warehouse and its inventory.
    pub async fn delete_warehouse(&self) -> Result<(), AppError> {
        let mut session = self.session.lock().await;

        let Some(current) = session.current.take() else {
            return Ok(());
        };

        match self.warehouses.delete(current.id).await {
            Ok(()) => {
                tracing::info!(warehouse = %current.name, "Deleted warehouse");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(warehouse = %current.name, "Warehouse was already gone");
                Ok(())
            }
            Err(e) => {
                session.current = Some(current);
                Err(e.into())
            }
        }
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Add an item to the current warehouse with an automatic ID.
    pub async fn add_item(&self, name: &str, quantity: &str, other: &str) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = self.try_add_item(&session, name, quantity, other).await;
        session.record(result)
    }

    async fn try_add_item(
        &self,
        session: &Session,
        name: &str,
        quantity: &str,
        other: &str,
    ) -> Result<(), DomainError> {
        let current = session
            .current
            .as_ref()
            .ok_or_else(|| invalid(MSG_NO_WAREHOUSE_FOR_ITEM))?;
        let quantity = parse_int(quantity).ok_or_else(|| invalid(MSG_QUANTITY_NOT_INTEGER))?;

        let item = self
            .items
            .create(
                current.id,
                &NewItem {
                    name: name.to_string(),
                    quantity,
                    other: other.to_string(),
                },
            )
            .await?;

        tracing::debug!(warehouse = %current.name, item = %item.id, "Added item");
        Ok(())
    }

    /// Change an item's quantity by `delta`, e.g. `edit_quantity("5", "-3")`.
    pub async fn edit_quantity(&self, id: &str, delta: &str) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = self.try_edit_quantity(&session, id, delta).await;
        session.record(result)
    }

    async fn try_edit_quantity(
        &self,
        session: &Session,
        id: &str,
        delta: &str,
    ) -> Result<(), DomainError> {
        let (id, delta) = match (parse_int(id), parse_int(delta)) {
            (Some(id), Some(delta)) => (ItemId(id), delta),
            _ => return Err(invalid(MSG_EDIT_QUANTITY_NOT_INTEGER)),
        };

        let item = self
            .current_item(session, id)
            .await?
            .ok_or_else(|| DomainError::NotFound(MSG_ITEM_MISSING.to_string()))?;

        let quantity = item
            .adjusted_quantity(delta)
            .ok_or_else(|| invalid(MSG_QUANTITY_OUT_OF_RANGE))?;

        self.items
            .set_quantity(item.warehouse_id, item.id, quantity)
            .await
    }

    /// Load an item into the pending edit slot.
    pub async fn edit_item(&self, id: &str) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = match parse_int(id) {
            Some(id) => self.current_item(&session, ItemId(id)).await,
            None => Ok(None),
        };

        match result {
            Ok(Some(item)) => {
                session.edit_item = Some(item);
                Ok(())
            }
            Ok(None) => session.record(Err(DomainError::NotFound(
                MSG_EDIT_ITEM_MISSING.to_string(),
            ))),
            Err(e) => session.record(Err(e)),
        }
    }

    /// Overwrite the item stored under `old_id`, possibly renumbering it.
    pub async fn save_edit(
        &self,
        name: &str,
        id: &str,
        quantity: &str,
        other: &str,
        old_id: &str,
    ) -> Result<(), AppError> {
        let mut session = self.session.lock().await;
        let result = self
            .try_save_edit(&session, name, id, quantity, other, old_id)
            .await;
        session.record(result)
    }

    async fn try_save_edit(
        &self,
        session: &Session,
        name: &str,
        id: &str,
        quantity: &str,
        other: &str,
        old_id: &str,
    ) -> Result<(), DomainError> {
        let quantity =
            parse_int(quantity).ok_or_else(|| invalid(MSG_SAVE_QUANTITY_NOT_INTEGER))?;
        let (id, old_id) = match (parse_int(id), parse_int(old_id)) {
            (Some(id), Some(old_id)) => (ItemId(id), ItemId(old_id)),
            _ => return Err(invalid(MSG_IDS_NOT_INTEGER)),
        };

        let item = self
            .current_item(session, old_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(MSG_EDIT_ITEM_MISSING.to_string()))?;

        if id != old_id && self.items.exists(item.warehouse_id, id).await? {
            return Err(DomainError::AlreadyExists(MSG_IDS_NOT_UNIQUE.to_string()));
        }

        self.items
            .update(
                item.warehouse_id,
                old_id,
                &ItemUpdate {
                    id,
                    name: name.to_string(),
                    quantity,
                    other: other.to_string(),
                },
            )
            .await
    }

    /// Delete an item from the current warehouse. Unknown IDs are ignored.
    pub async fn delete_item(&self, id: &str) -> Result<(), AppError> {
        let session = self.session.lock().await;

        let (Some(current), Some(item_id)) = (session.current.as_ref(), parse_int(id)) else {
            tracing::debug!("Ignoring delete of item {:?}", id);
            return Ok(());
        };

        if !self.items.delete(current.id, ItemId(item_id)).await? {
            tracing::debug!(warehouse = %current.name, "No item {} to delete", item_id);
        }
        Ok(())
    }

    /// Look up an item in the current warehouse, if one is selected
    async fn current_item(
        &self,
        session: &Session,
        id: ItemId,
    ) -> Result<Option<Item>, DomainError> {
        match &session.current {
            Some(current) => self.items.find(current.id, id).await,
            None => Ok(None),
        }
    }
}
