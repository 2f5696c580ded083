//! Custbook-Common: shared types for the custbook crates.
//!
//! - **Typed IDs**: [`CustomerId`] wraps the SQLite rowid of a stored customer
//! - **Error Handling**: common error type and result alias
//!
//! # Examples
//!
//! ```
//! use custbook_common::{CustomerId, Error, Result};
//!
//! let id = CustomerId::new(1);
//! assert_eq!(id.get(), 1);
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("customer has no id"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
