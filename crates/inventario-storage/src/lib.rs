//! Persistence layer for the inventory service.
//!
//! [`InventoryStore`] wraps a SeaORM [`sea_orm::DatabaseConnection`] and
//! exposes the three operations the API needs: an atomic upsert keyed by
//! hostname and two full-table listings. The backend is chosen by the
//! connection URL (SQLite with WAL for small deployments and tests,
//! PostgreSQL in production).

pub mod entities;
pub mod error;
pub mod store;


pub use error::{Result, StorageError};
pub use store::InventoryStore;
