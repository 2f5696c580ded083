//! Custbook-DB: SQLite store, schema, and customer queries
//!
//! This crate keeps customer records in a single SQLite file using rusqlite.
//!
//! # Modules
//!
//! - `store` - Opening and closing the store
//! - `schema` - Creating and dropping the `customers` table
//! - `models` - The `Customer` record
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```
//! use custbook_db::models::Customer;
//! use custbook_db::queries::customers;
//! use custbook_db::store::open_memory_store;
//!
//! let conn = open_memory_store().unwrap();
//! let stored = customers::insert_customer(&conn, &Customer::new("Max", "Mustermann", "mmuster@aol.de")).unwrap();
//! let found = customers::get_customer(&conn, stored.id.unwrap()).unwrap();
//! assert_eq!(found, Some(stored));
//! ```

pub mod models;
pub mod queries;
pub mod schema;
pub mod store;
