//! Command implementations for the CLI
//!
//! - start: Start the HTTP server
//! - test: Test configuration validity
//! - config: Configuration display and validation
//! - materials: List and update material prices
//! - estimate: Estimate BOM cost from the command line

pub mod config;
pub mod estimate;
pub mod materials;
pub mod start;
pub mod test;

use anyhow::Result;
use bom_cost::{config::Config, store::SqliteMaterialStore};

/// Open the configured material store
pub(crate) async fn open_store(cfg: &Config) -> Result<SqliteMaterialStore> {
    SqliteMaterialStore::connect(&cfg.database.url, cfg.database.max_connections).await
}
