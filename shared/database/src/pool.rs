use async_trait::async_trait;
use sqlx::any::{AnyArguments, AnyPoolOptions};
use sqlx::query::Query;
use sqlx::{Any, AnyPool};

use northwind_utils::{DatabaseConfig, Dialect, NorthwindResult};

use crate::handle::{Database, Row};
use crate::sql::{Sql, SqlValue};

pub async fn create_pool(config: &DatabaseConfig) -> NorthwindResult<AnyPool> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connection_timeout())
        .connect(&config.url)
        .await?;

    tracing::info!(dialect = %config.resolved_dialect(), "Connected to database");
    Ok(pool)
}

pub async fn health_check(pool: &AnyPool) -> NorthwindResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// [`Database`] implementation over an sqlx connection pool.
#[derive(Debug, Clone)]
pub struct SqlxDatabase {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlxDatabase {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    pub async fn connect(config: &DatabaseConfig) -> NorthwindResult<Self> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool, config.resolved_dialect()))
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub async fn health_check(&self) -> NorthwindResult<()> {
        health_check(&self.pool).await
    }
}

#[async_trait]
impl Database for SqlxDatabase {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn get(&self, statement: &Sql) -> NorthwindResult<Option<Row>> {
        let text = statement.text();
        tracing::debug!(sql = %text, params = statement.param_count(), "Fetching one row");

        let row = bind_params(sqlx::query(&text), statement)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn all(&self, statement: &Sql) -> NorthwindResult<Vec<Row>> {
        let text = statement.text();
        tracing::debug!(sql = %text, params = statement.param_count(), "Fetching rows");

        let rows = bind_params(sqlx::query(&text), statement)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "Fetched rows");
        Ok(rows)
    }
}

fn bind_params<'q>(
    query: Query<'q, Any, AnyArguments<'q>>,
    statement: &Sql,
) -> Query<'q, Any, AnyArguments<'q>> {
    statement
        .params()
        .into_iter()
        .fold(query, |query, value| match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Real(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Bool(v) => query.bind(*v),
        })
}
