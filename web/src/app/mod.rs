//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports and the user session.

pub mod warehouse_service;

pub use warehouse_service::WarehouseService;
