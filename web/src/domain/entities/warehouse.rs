//! Warehouse domain entity
//!
//! A named inventory. Exactly one warehouse may be selected at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WarehouseId(pub i32);

impl From<i32> for WarehouseId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A warehouse holding its own set of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A validated warehouse name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarehouseName(String);

impl WarehouseName {
    /// Normalize a user-supplied name: every space becomes `_`.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let name = raw.replace(' ', "_");
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Warehouse Name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WarehouseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
