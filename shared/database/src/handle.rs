//! The database handle the repositories run their statements against.

use async_trait::async_trait;
use northwind_utils::{Dialect, NorthwindResult};

use crate::sql::Sql;

/// One result row, decoded by the caller into a typed row struct.
pub use sqlx::any::AnyRow as Row;

#[async_trait]
pub trait Database: Send + Sync {
    /// Engine kind behind this handle.
    fn dialect(&self) -> Dialect;

    /// Runs `statement` and returns its first row, if any.
    async fn get(&self, statement: &Sql) -> NorthwindResult<Option<Row>>;

    /// Runs `statement` and returns every row.
    async fn all(&self, statement: &Sql) -> NorthwindResult<Vec<Row>>;
}
