//! Store connection management.
//!
//! A store is one SQLite file holding the `customers` table. Opening a store
//! creates the file when it does not exist and makes sure the schema is in
//! place, so a freshly opened connection is always ready for queries.
//!
//! There is exactly one connection per store: the program is single-threaded
//! and every query borrows the same `&Connection`. Dropping the connection
//! closes it; [`close_store`] does the same but reports close failures.

use std::path::Path;

use custbook_common::{Error, Result};
use rusqlite::Connection;

use crate::schema;

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "database.db";

/// Open the store at `db_path` and ensure the schema exists.
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(Connection)` - Open connection with the `customers` table present
/// * `Err(Error)` - If the file cannot be opened or created, or the schema
///   cannot be applied
///
/// # Example
///
/// ```no_run
/// use custbook_db::store::open_store;
///
/// let conn = open_store("database.db").unwrap();
/// ```
pub fn open_store(db_path: impl AsRef<Path>) -> Result<Connection> {
    let db_path = db_path.as_ref();
    let conn = Connection::open(db_path).map_err(|e| {
        Error::database(format!("Failed to open store {}: {e}", db_path.display()))
    })?;

    schema::create_customers_table(&conn)?;
    tracing::debug!(path = %db_path.display(), "store opened");

    Ok(conn)
}

/// Open an in-memory store for testing.
///
/// The data is lost when the connection is dropped.
///
/// # Example
///
/// ```
/// use custbook_db::store::open_memory_store;
///
/// let conn = open_memory_store().unwrap();
/// ```
pub fn open_memory_store() -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::database(format!("Failed to open in-memory store: {e}")))?;

    schema::create_customers_table(&conn)?;

    Ok(conn)
}

/// Close the connection, releasing the file lock.
pub fn close_store(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, e)| Error::database(format!("Failed to close store: {e}")))?;
    tracing::debug!("store closed");
    Ok(())
}
