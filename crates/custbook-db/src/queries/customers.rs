//! Customer CRUD operations.
//!
//! Every function runs one parameterized statement on the borrowed
//! connection and commits immediately, except [`insert_customers`] which
//! wraps its inserts in a single transaction. "Storage order" is ascending
//! rowid.

use custbook_common::{CustomerId, Error, Result};
use rusqlite::{Connection, Params};

use crate::models::Customer;

const INSERT_RETURNING: &str = "INSERT INTO customers (first_name, last_name, email)
     VALUES (?1, ?2, ?3)
     RETURNING rowid, first_name, last_name, email";

const SELECT_COLUMNS: &str = "SELECT rowid, first_name, last_name, email FROM customers";

/// Run a select whose columns match [`Customer::from_row`].
fn query_customers<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Customer>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map(params, Customer::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Insert one customer and return the stored row with its assigned id.
///
/// Any id already on `customer` is ignored. No duplicate check is made.
///
/// # Returns
///
/// * `Ok(Customer)` - The stored row, `id` set
/// * `Err(Error)` - If a database error occurs
pub fn insert_customer(conn: &Connection, customer: &Customer) -> Result<Customer> {
    let stored = conn
        .query_row(
            INSERT_RETURNING,
            rusqlite::params![customer.first_name, customer.last_name, customer.email],
            Customer::from_row,
        )
        .map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(id = ?stored.id, "inserted customer");
    Ok(stored)
}

/// Insert many customers in one transaction.
///
/// Either every row is committed or, on the first failure, none is.
/// Returns the stored rows in input order.
pub fn insert_customers(conn: &Connection, customers: &[Customer]) -> Result<Vec<Customer>> {
    if customers.is_empty() {
        return Ok(Vec::new());
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    let mut stored = Vec::with_capacity(customers.len());
    {
        let mut stmt = tx
            .prepare_cached(INSERT_RETURNING)
            .map_err(|e| Error::database(e.to_string()))?;
        for customer in customers {
            let row = stmt
                .query_row(
                    rusqlite::params![customer.first_name, customer.last_name, customer.email],
                    Customer::from_row,
                )
                .map_err(|e| Error::database(e.to_string()))?;
            stored.push(row);
        }
    }

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(count = stored.len(), "inserted customers");
    Ok(stored)
}

/// List every customer without row ids.
pub fn list_customers_without_ids(conn: &Connection) -> Result<Vec<Customer>> {
    let mut stmt = conn
        .prepare("SELECT first_name, last_name, email FROM customers ORDER BY rowid")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Customer::from_row_without_id)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List every customer with its id, in storage order.
pub fn list_customers(conn: &Connection) -> Result<Vec<Customer>> {
    query_customers(conn, &format!("{SELECT_COLUMNS} ORDER BY rowid"), [])
}

/// Split the full listing into its first row and the remaining rows.
///
/// # Returns
///
/// * `Ok(Some((first, rest)))` - For a non-empty table
/// * `Ok(None)` - If the table has no rows
pub fn first_customer_and_rest(conn: &Connection) -> Result<Option<(Customer, Vec<Customer>)>> {
    let mut all = list_customers(conn)?;
    if all.is_empty() {
        return Ok(None);
    }
    let rest = all.split_off(1);
    Ok(all.pop().map(|first| (first, rest)))
}

/// Customers whose last name equals `last_name` exactly (case-sensitive).
pub fn find_by_last_name(conn: &Connection, last_name: &str) -> Result<Vec<Customer>> {
    query_customers(
        conn,
        &format!("{SELECT_COLUMNS} WHERE last_name = ?1 ORDER BY rowid"),
        [last_name],
    )
}

/// Customers whose email matches a `LIKE` pattern (`%` and `_` wildcards).
///
/// SQLite's `LIKE` ignores ASCII case.
pub fn find_by_email_pattern(conn: &Connection, pattern: &str) -> Result<Vec<Customer>> {
    query_customers(
        conn,
        &format!("{SELECT_COLUMNS} WHERE email LIKE ?1 ORDER BY rowid"),
        [pattern],
    )
}

/// Get a customer by row id.
///
/// # Returns
///
/// * `Ok(Some(Customer))` - The customer if found
/// * `Ok(None)` - If no row has this id
/// * `Err(Error)` - If a database error occurs
pub fn get_customer(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
    let result = conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE rowid = ?1"),
        [id.get()],
        Customer::from_row,
    );
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Every customer ordered by last name, descending. Ties keep storage order.
pub fn list_by_last_name_desc(conn: &Connection) -> Result<Vec<Customer>> {
    query_customers(
        conn,
        &format!("{SELECT_COLUMNS} ORDER BY last_name DESC, rowid"),
        [],
    )
}

/// Customers matching an exact last name AND an email pattern.
pub fn find_by_last_name_and_email_pattern(
    conn: &Connection,
    last_name: &str,
    email_pattern: &str,
) -> Result<Vec<Customer>> {
    query_customers(
        conn,
        &format!("{SELECT_COLUMNS} WHERE last_name = ?1 AND email LIKE ?2 ORDER BY rowid"),
        [last_name, email_pattern],
    )
}

/// The first `limit` customers in storage order.
pub fn list_customers_limited(conn: &Connection, limit: usize) -> Result<Vec<Customer>> {
    let limit = i64::try_from(limit)
        .map_err(|_| Error::invalid_input(format!("limit {limit} is out of range")))?;
    query_customers(
        conn,
        &format!("{SELECT_COLUMNS} ORDER BY rowid LIMIT ?1"),
        [limit],
    )
}

/// Total number of stored customers.
pub fn count_customers(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(usize::try_from(count).unwrap_or_default())
}

/// Overwrite all three fields of the row identified by `customer.id`.
///
/// # Returns
///
/// * `Ok(true)` - If the row was updated
/// * `Ok(false)` - If no row has this id
/// * `Err(Error)` - If `customer` has no id, or a database error occurs
pub fn update_customer(conn: &Connection, customer: &Customer) -> Result<bool> {
    let id = customer
        .id
        .ok_or_else(|| Error::invalid_input("cannot update a customer without an id"))?;

    let n = conn
        .execute(
            "UPDATE customers SET first_name = ?1, last_name = ?2, email = ?3 WHERE rowid = ?4",
            rusqlite::params![customer.first_name, customer.last_name, customer.email, id.get()],
        )
        .map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(%id, updated = n > 0, "update customer");
    Ok(n > 0)
}

/// Delete a customer by row id.
///
/// # Returns
///
/// * `Ok(true)` - If the customer was deleted
/// * `Ok(false)` - If no row has this id
/// * `Err(Error)` - If a database error occurs
pub fn delete_customer(conn: &Connection, id: CustomerId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM customers WHERE rowid = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(%id, deleted = n > 0, "delete customer");
    Ok(n > 0)
}
