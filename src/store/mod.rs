//! Material price persistence
//!
//! The store is a keyed table of fabric reference prices:
//! - writes are upserts keyed on the fabric type
//! - reads return the whole table ordered by fabric type, or a single row

pub mod sqlite;

use async_trait::async_trait;

use crate::models::{MaterialPrice, MaterialPriceInput};

pub use sqlite::SqliteMaterialStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

#[async_trait]
pub trait MaterialStore: Send + Sync {
    /// Insert a price row or overwrite the existing row for the same fabric type.
    /// Invalid input is rejected before the store is touched.
    async fn upsert(&self, input: MaterialPriceInput) -> StoreResult<MaterialPrice>;

    /// All rows, ascending by fabric type in byte order
    async fn list(&self) -> StoreResult<Vec<MaterialPrice>>;

    /// Exactly one row, or `NotFound`
    async fn get(&self, fabric_type: &str) -> StoreResult<MaterialPrice>;

    /// Cheap round trip used by the readiness probe
    async fn ping(&self) -> StoreResult<()>;
}
