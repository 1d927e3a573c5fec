pub mod handle;
pub mod pool;
pub mod repositories;
pub mod sql;

pub use handle::{Database, Row};
pub use pool::{create_pool, health_check, SqlxDatabase};
pub use repositories::*;
pub use sql::{Sql, SqlValue};

use anyhow::{Context, Result};
use northwind_utils::DatabaseConfig;
use std::sync::Arc;

/// Opens the pool, checks it answers, and builds the repositories on top of it.
pub async fn initialize_repositories(
    config: &DatabaseConfig,
) -> Result<(CustomerRepository, SupplierRepository)> {
    let database = SqlxDatabase::connect(config)
        .await
        .context("Failed to connect to database")?;
    database
        .health_check()
        .await
        .context("Database health check failed")?;

    let database: Arc<dyn Database> = Arc::new(database);
    Ok((
        CustomerRepository::new(database.clone()),
        SupplierRepository::new(database),
    ))
}
