//! SQLite-backed material price store
//!
//! Connection pooling and schema migration follow the same pattern as the
//! rest of the service: options parsed from a URL, WAL journal for file
//! databases, and `sqlx::migrate!` run once at connect time.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::{MaterialStore, StoreError, StoreResult};
use crate::models::{MaterialPrice, MaterialPriceInput};

pub struct SqliteMaterialStore {
    pool: SqlitePool,
}

impl SqliteMaterialStore {
    /// Connect to the database at `database_url` and run migrations
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = SqliteMaterialStore::connect("sqlite:./data/materials.db", 5).await?;
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let in_memory = is_memory_url(database_url);

        if let Some(parent) = database_file_path(database_url).and_then(|p| p.parent().map(PathBuf::from)) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(&parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database url: {}", database_url))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(30));
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // Every pooled connection to `:memory:` would open its own empty
        // database, so an in-memory store is pinned to one long-lived connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .context("Failed to connect to material price database")?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Private in-memory database, used by tests and dry runs
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .context("Failed to run material price migrations")?;

        tracing::debug!("Material price migrations completed");
        Ok(())
    }
}

#[async_trait]
impl MaterialStore for SqliteMaterialStore {
    async fn upsert(&self, input: MaterialPriceInput) -> StoreResult<MaterialPrice> {
        input.validate().map_err(StoreError::InvalidInput)?;
        let price = input.into_price();

        let saved = sqlx::query_as::<_, MaterialPrice>(
            r#"
            INSERT INTO material_prices (
                fabric_type, unit_price_usd_per_meter, overhead_rate_pct, updated_at
            )
            VALUES (?, ?, ?, ?)
            ON CONFLICT(fabric_type) DO UPDATE SET
                unit_price_usd_per_meter = excluded.unit_price_usd_per_meter,
                overhead_rate_pct = excluded.overhead_rate_pct,
                updated_at = excluded.updated_at
            RETURNING fabric_type, unit_price_usd_per_meter, overhead_rate_pct
            "#,
        )
        .bind(&price.fabric_type)
        .bind(price.unit_price_usd_per_meter)
        .bind(price.overhead_rate_pct)
        .bind(chrono::Utc::now().timestamp_millis())
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn list(&self) -> StoreResult<Vec<MaterialPrice>> {
        let rows = sqlx::query_as::<_, MaterialPrice>(
            r#"
            SELECT fabric_type, unit_price_usd_per_meter, overhead_rate_pct
            FROM material_prices
            ORDER BY fabric_type COLLATE BINARY ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, fabric_type: &str) -> StoreResult<MaterialPrice> {
        sqlx::query_as::<_, MaterialPrice>(
            r#"
            SELECT fabric_type, unit_price_usd_per_meter, overhead_rate_pct
            FROM material_prices
            WHERE fabric_type = ?
            "#,
        )
        .bind(fabric_type)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(fabric_type.to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// File path behind a `sqlite:` url, `None` for in-memory databases
fn database_file_path(database_url: &str) -> Option<PathBuf> {
    if is_memory_url(database_url) {
        return None;
    }
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
