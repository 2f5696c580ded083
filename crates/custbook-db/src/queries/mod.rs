//! Database query modules.
//!
//! - customers: customer CRUD and the select variants

pub mod customers;
