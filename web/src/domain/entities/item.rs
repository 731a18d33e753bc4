//! Item domain entity
//!
//! An inventory row inside one warehouse. Item IDs are only unique per
//! warehouse and can be changed by the user.

use serde::{Deserialize, Serialize};

use super::warehouse::WarehouseId;

/// Per-warehouse item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i64);

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_int(s)
            .map(ItemId)
            .ok_or_else(|| format!("Invalid item ID: {}", s))
    }
}

/// An item stored in a warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub warehouse_id: WarehouseId,
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub other: String,
}

impl Item {
    /// Quantity after applying `delta`, or `None` on overflow
    pub fn adjusted_quantity(&self, delta: i64) -> Option<i64> {
        self.quantity.checked_add(delta)
    }
}

/// Data needed to create a new item; the ID is assigned by storage
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub other: String,
}

/// Replacement values for an existing item
#[derive(Debug, Clone)]
pub struct ItemUpdate {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub other: String,
}

/// Parse integer form input.
///
/// Surrounding whitespace is ignored and a leading sign is accepted.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(quantity: i64) -> Item {
        Item {
            warehouse_id: WarehouseId(1),
            id: ItemId(3),
            name: "bolts".to_string(),
            quantity,
            other: "M6".to_string(),
        }
    }

    #[test]
    fn parse_int_accepts_signs_and_whitespace() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -10 "), Some(-10));
        assert_eq!(parse_int("+1"), Some(1));
    }

    #[test]
    fn parse_int_rejects_garbage() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("ten"), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn item_id_from_str() {
        assert_eq!("7".parse::<ItemId>().unwrap(), ItemId(7));
        assert!("seven".parse::<ItemId>().is_err());
    }

    #[test]
    fn adjusted_quantity_allows_negative() {
        assert_eq!(make_item(5).adjusted_quantity(-10), Some(-5));
        assert_eq!(make_item(5).adjusted_quantity(1), Some(6));
    }

    #[test]
    fn adjusted_quantity_detects_overflow() {
        assert_eq!(make_item(i64::MAX).adjusted_quantity(1), None);
        assert_eq!(make_item(i64::MIN).adjusted_quantity(-1), None);
    }
}
