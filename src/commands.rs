//! Handlers for the single-operation subcommands.
//!
//! Each handler runs one repository call on an open store and writes a
//! status line or table to `out`. A lookup, update, or delete that matches
//! no row is reported on `out` and still returns `Ok`.

use std::io::Write;

use custbook_common::{CustomerId, Error, Result};
use custbook_db::models::Customer;
use custbook_db::queries::customers;
use custbook_db::schema;
use rusqlite::Connection;

use crate::display::{describe_customer, render_customers};

/// How `list` orders and bounds its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    First(usize),
    LastNameDesc,
}

pub fn list<W: Write>(conn: &Connection, listing: Listing, width: usize, out: &mut W) -> Result<()> {
    let rows = match listing {
        Listing::All => customers::list_customers(conn)?,
        Listing::First(n) => customers::list_customers_limited(conn, n)?,
        Listing::LastNameDesc => customers::list_by_last_name_desc(conn)?,
    };
    write!(out, "{}", render_customers(&rows, width, true))?;
    writeln!(out, "{} of {} customers", rows.len(), customers::count_customers(conn)?)?;
    Ok(())
}

pub fn add<W: Write>(conn: &Connection, customer: &Customer, out: &mut W) -> Result<()> {
    let stored = customers::insert_customer(conn, customer)?;
    writeln!(out, "Customer {} added to the database", describe_customer(&stored))?;
    Ok(())
}

pub fn show<W: Write>(conn: &Connection, id: CustomerId, out: &mut W) -> Result<()> {
    match customers::get_customer(conn, id)? {
        Some(customer) => writeln!(out, "{}", describe_customer(&customer))?,
        None => writeln!(out, "Customer {id} not found")?,
    }
    Ok(())
}

/// Filter by last name, email pattern, or both. At least one is required.
pub fn find<W: Write>(
    conn: &Connection,
    last_name: Option<&str>,
    email_pattern: Option<&str>,
    width: usize,
    out: &mut W,
) -> Result<()> {
    let rows = match (last_name, email_pattern) {
        (Some(last), Some(pattern)) => {
            customers::find_by_last_name_and_email_pattern(conn, last, pattern)?
        }
        (Some(last), None) => customers::find_by_last_name(conn, last)?,
        (None, Some(pattern)) => customers::find_by_email_pattern(conn, pattern)?,
        (None, None) => {
            return Err(Error::invalid_input(
                "find needs --last-name, --email, or both",
            ))
        }
    };
    write!(out, "{}", render_customers(&rows, width, true))?;
    writeln!(out, "{} matching customers", rows.len())?;
    Ok(())
}

pub fn update<W: Write>(conn: &Connection, customer: &Customer, out: &mut W) -> Result<()> {
    if customers::update_customer(conn, customer)? {
        writeln!(out, "Customer updated to {}", describe_customer(customer))?;
    } else {
        writeln!(out, "No customer matched {}, nothing updated", describe_customer(customer))?;
    }
    Ok(())
}

pub fn remove<W: Write>(conn: &Connection, id: CustomerId, out: &mut W) -> Result<()> {
    if customers::delete_customer(conn, id)? {
        writeln!(out, "Customer {id} deleted")?;
    } else {
        writeln!(out, "Customer {id} not found, nothing deleted")?;
    }
    Ok(())
}

pub fn drop_table<W: Write>(conn: &Connection, out: &mut W) -> Result<()> {
    schema::drop_customers_table(conn)?;
    writeln!(out, "Table 'customers' dropped")?;
    Ok(())
}
