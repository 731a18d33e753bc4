//! Test utilities
//!
//! In-memory repository implementations and fixtures for service tests.
//! Adapter and router tests use an in-memory SQLite database instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
