//! The fixed walkthrough run when no subcommand is given.
//!
//! Each step performs one repository call against the open store and writes
//! a status line or a table to `out`. The sequence ends by dropping the
//! `customers` table, so it only runs against a store with no rows: rows
//! saved by the other subcommands are left untouched.

use std::io::Write;

use custbook_common::{CustomerId, Result};
use custbook_db::models::Customer;
use custbook_db::queries::customers;
use custbook_db::schema;
use rusqlite::Connection;

use crate::config::DisplayConfig;
use crate::display::{describe_customer, render_customers};

/// Id that the walkthrough looks up to show the not-found path.
const MISSING_ID: CustomerId = CustomerId::new(i64::MAX);

/// Customers inserted by the batch step.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("Max", "Mustermann", "mmuster@aol.de"),
        Customer::new("Erika", "Mustermann", "emuster@aol.de"),
        Customer::new("Henriette", "Müller", "hmüller@aol.de"),
    ]
}

/// Run the whole walkthrough on `conn`.
pub fn run_demo<W: Write>(conn: &Connection, display: &DisplayConfig, out: &mut W) -> Result<()> {
    let width = display.column_width;

    schema::create_customers_table(conn)?;
    writeln!(out, "Table 'customers' created or already exists")?;

    let existing = customers::count_customers(conn)?;
    if existing > 0 {
        tracing::warn!(existing, "store is not empty, skipping demo");
        writeln!(
            out,
            "The store already holds {existing} customers; the demo drops the table when it \
             finishes, so run it against an empty store with --database <path>"
        )?;
        return Ok(());
    }

    // Single insert
    let tobi = Customer::new("Tobi", "Wobi", "twobi@aol.de");
    writeln!(
        out,
        "Inserting customer {} {} into the database...",
        tobi.first_name, tobi.last_name
    )?;
    let tobi = customers::insert_customer(conn, &tobi)?;
    writeln!(out, "Customer {} added to the database", describe_customer(&tobi))?;

    // Batch insert
    let batch = sample_customers();
    writeln!(out, "Inserting the following customers into the database:")?;
    for customer in &batch {
        writeln!(out, "{customer}")?;
    }
    let stored = customers::insert_customers(conn, &batch)?;
    writeln!(out, "{} customers added to the database", stored.len())?;

    // First row, then the rest
    match customers::first_customer_and_rest(conn)? {
        Some((first, rest)) => {
            writeln!(out, "Fetching the first customer from the database:")?;
            writeln!(out, "{}", describe_customer(&first))?;
            writeln!(out, "Fetching the rest of customers in the database:")?;
            write!(out, "{}", render_customers(&rest, width, false))?;
            writeln!(out, "End of customers")?;
        }
        None => writeln!(out, "The customers table is empty")?,
    }

    writeln!(out, "All customers:")?;
    let all = customers::list_customers_without_ids(conn)?;
    write!(out, "{}", render_customers(&all, width, false))?;

    writeln!(out, "All customers with their row ids:")?;
    let all = customers::list_customers(conn)?;
    write!(out, "{}", render_customers(&all, width, true))?;

    // Filters
    writeln!(out, "Customers with last name 'Mustermann':")?;
    let found = customers::find_by_last_name(conn, "Mustermann")?;
    write!(out, "{}", render_customers(&found, width, true))?;

    writeln!(out, "Customers with an email like '%@aol.de':")?;
    let found = customers::find_by_email_pattern(conn, "%@aol.de")?;
    write!(out, "{}", render_customers(&found, width, true))?;

    // Lookup by id, found and not found
    if let Some(id) = tobi.id {
        lookup(conn, id, out)?;
    }
    lookup(conn, MISSING_ID, out)?;

    writeln!(out, "Customers ordered by last name, descending:")?;
    let ordered = customers::list_by_last_name_desc(conn)?;
    write!(out, "{}", render_customers(&ordered, width, true))?;

    writeln!(out, "Customers with last name 'Mustermann' and an email like 'e%':")?;
    let found = customers::find_by_last_name_and_email_pattern(conn, "Mustermann", "e%")?;
    write!(out, "{}", render_customers(&found, width, true))?;

    writeln!(out, "The first 2 customers:")?;
    let limited = customers::list_customers_limited(conn, 2)?;
    write!(out, "{}", render_customers(&limited, width, true))?;

    // Update
    let renamed = Customer {
        first_name: "Tobias".to_string(),
        last_name: "Wobbel".to_string(),
        email: "twobbel@aol.de".to_string(),
        ..tobi
    };
    if customers::update_customer(conn, &renamed)? {
        writeln!(out, "Customer updated to {}", describe_customer(&renamed))?;
    } else {
        writeln!(out, "No customer matched {}, nothing updated", describe_customer(&renamed))?;
    }
    if let Some(id) = renamed.id {
        lookup(conn, id, out)?;

        // Delete
        if customers::delete_customer(conn, id)? {
            writeln!(out, "Customer {id} deleted")?;
        } else {
            writeln!(out, "Customer {id} not found, nothing deleted")?;
        }
        lookup(conn, id, out)?;
    }

    writeln!(out, "Remaining customers: {}", customers::count_customers(conn)?)?;

    schema::drop_customers_table(conn)?;
    writeln!(out, "Table 'customers' dropped")?;

    tracing::info!("demo finished");
    Ok(())
}

fn lookup<W: Write>(conn: &Connection, id: CustomerId, out: &mut W) -> Result<()> {
    match customers::get_customer(conn, id)? {
        Some(customer) => writeln!(out, "Found customer {}", describe_customer(&customer))?,
        None => writeln!(out, "Customer {id} not found")?,
    }
    Ok(())
}
