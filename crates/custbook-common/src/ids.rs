//! Typed ID wrapper for stored customers.
//!
//! SQLite assigns every row of a rowid table a 64-bit integer key. Wrapping
//! it keeps a bare `i64` (a count, a limit) from being passed where a row
//! identity is expected.

use std::str::FromStr;

/// Row identifier of a stored customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw rowid.
    #[must_use]
    pub const fn new(rowid: i64) -> Self {
        Self(rowid)
    }

    /// The raw rowid, for binding into statements.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(rowid: i64) -> Self {
        Self(rowid)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl FromStr for CustomerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
