/// Database access
///
/// `SqlClient` is the seam between the menu handlers and the server: the
/// handlers only ever hand it a finished SQL string. `PgClient` talks to a
/// real PostgreSQL instance over sqlx.

pub mod postgres;

use crate::core::{ResultSet, ShopError, ShopTable};
use tracing::debug;

pub use postgres::{ConnectionSettings, PgClient};

#[allow(async_fn_in_trait)]
pub trait SqlClient {
    /// Runs a statement that returns rows
    async fn query(&mut self, sql: &str) -> Result<ResultSet, ShopError>;

    /// Runs INSERT/UPDATE/DELETE/DDL, returns the affected row count
    async fn execute(&mut self, sql: &str) -> Result<u64, ShopError>;
}

/// Next free key of `table`, `MAX(key) + 1`, or 1 when the table is empty.
///
/// Not atomic: two sessions allocating at once get the same id.
pub async fn next_id<C: SqlClient>(client: &mut C, table: ShopTable) -> Result<i32, ShopError> {
    let result = client.query(&table.max_key_query()).await?;
    let current = match result.first() {
        Some(row) if !row.is_null(0) => row.int(0)?,
        _ => 0,
    };
    let next = current
        .checked_add(1)
        .ok_or_else(|| ShopError::validation(format!("no free key left in {table}")))?;
    debug!(table = table.name(), id = next, "allocated key");
    Ok(next)
}
