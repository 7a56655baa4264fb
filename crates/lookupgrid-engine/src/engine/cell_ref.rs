//! Cell coordinates.
//!
//! A coordinate is a `(column, row)` pair of strings. Columns are the names
//! declared in a sheet schema and rows are free-form labels, so neither side
//! is interpreted numerically: equality and ordering are purely structural.
//!
//! # Examples
//!
//! ```ignore
//! let coord = Coord::new("A", "10");
//! assert_eq!(coord.to_string(), "('A', '10')");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::quote_token;

/// A reference to a cell by column name and row label.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Coord {
    pub column: String,
    pub row: String,
}

impl Coord {
    pub fn new(column: impl Into<String>, row: impl Into<String>) -> Coord {
        Coord {
            column: column.into(),
            row: row.into(),
        }
    }
}

/// Renders the transport key form, e.g. `('A', '1')`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            quote_token(&self.column),
            quote_token(&self.row)
        )
    }
}
