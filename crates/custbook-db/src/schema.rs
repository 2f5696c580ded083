//! Schema management for the `customers` table.
//!
//! The table is a plain rowid table with three advisory TEXT columns: no
//! primary key, no indexes, no constraints. Both operations here are
//! idempotent, so callers may run them on every start.

use custbook_common::{Error, Result};
use rusqlite::Connection;

const CREATE_CUSTOMERS: &str = "CREATE TABLE IF NOT EXISTS customers (
    first_name TEXT,
    last_name TEXT,
    email TEXT
)";

const DROP_CUSTOMERS: &str = "DROP TABLE IF EXISTS customers";

/// Create the `customers` table if it is absent.
pub fn create_customers_table(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_CUSTOMERS, [])
        .map_err(|e| Error::database(format!("Failed to create customers table: {e}")))?;
    tracing::debug!("customers table created or already exists");
    Ok(())
}

/// Drop the `customers` table and every row in it, if it exists.
pub fn drop_customers_table(conn: &Connection) -> Result<()> {
    conn.execute(DROP_CUSTOMERS, [])
        .map_err(|e| Error::database(format!("Failed to drop customers table: {e}")))?;
    tracing::debug!("customers table dropped");
    Ok(())
}

/// Whether the `customers` table is present.
pub fn customers_table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'customers'",
            [],
            |row| row.get(0),
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(count > 0)
}
