//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which opens a file-backed store in a temporary
//! directory so tests exercise the same path the binary uses.

#![allow(dead_code)]

use std::path::PathBuf;

use custbook_db::models::Customer;
use custbook_db::queries::customers;
use custbook_db::store::open_store;
use rusqlite::Connection;
use tempfile::TempDir;

/// Temporary store directory plus an open connection to `customers.db` in it.
pub struct TestHarness {
    pub dir: TempDir,
    pub db_path: PathBuf,
    pub conn: Connection,
}

impl TestHarness {
    /// Open an empty store.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("customers.db");
        let conn = open_store(&db_path).expect("failed to open store");
        Self { dir, db_path, conn }
    }

    /// Open a store holding the Mustermann/Müller sample rows.
    pub fn seeded() -> Self {
        let harness = Self::new();
        customers::insert_customers(&harness.conn, &custbook::demo::sample_customers())
            .expect("failed to seed customers");
        harness
    }

    pub fn insert(&self, first: &str, last: &str, email: &str) -> Customer {
        customers::insert_customer(&self.conn, &Customer::new(first, last, email))
            .expect("failed to insert customer")
    }
}
