//! Rust struct mapping to the `customers` table.
//!
//! Rows are read with the rowid in column 0 followed by the three text
//! columns, or with the text columns alone for the id-less listing.

use custbook_common::CustomerId;

/// One customer record.
///
/// `id` is `None` for records built in memory and for rows read through
/// [`crate::queries::customers::list_customers_without_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// Build an unsaved customer.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Same fields, attached to a stored row.
    #[must_use]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this record refers to a stored row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Map `rowid, first_name, last_name, email`.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(CustomerId::new(row.get(0)?)),
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
        })
    }

    /// Map `first_name, last_name, email`.
    pub fn from_row_without_id(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: None,
            first_name: row.get(0)?,
            last_name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.first_name, self.last_name, self.email)
    }
}
